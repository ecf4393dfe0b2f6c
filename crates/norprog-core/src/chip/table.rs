//! Built-in chip table

use super::types::ChipDescriptor;

const KIB_64: u32 = 64 * 1024;

#[allow(clippy::too_many_arguments)]
const fn chip(
    vendor: &'static str,
    name: &'static str,
    manufacturer_id: u8,
    jedec_id: u32,
    sector_count: u32,
    four_byte_addr: bool,
    vcc_min_mv: u16,
    vcc_max_mv: u16,
) -> ChipDescriptor {
    ChipDescriptor {
        vendor,
        name,
        manufacturer_id,
        jedec_id,
        sector_size: KIB_64,
        sector_count,
        four_byte_addr,
        vcc_min_mv,
        vcc_max_mv,
    }
}

/// Every chip known at compile time, in identification order
#[rustfmt::skip]
pub(crate) static BUILTIN_CHIPS: &[ChipDescriptor] = &[
    // Spansion
    chip("Spansion",   "FL016AIF",            0x01, 0x02140000,   32, false, 2700, 3600),
    chip("Spansion",   "S25FL016P",           0x01, 0x02144D00,   32, false, 2700, 3600),
    chip("Spansion",   "S25FL032P",           0x01, 0x02154D00,   64, false, 2700, 3600),
    chip("Spansion",   "FL064AIF",            0x01, 0x02160000,  128, false, 2700, 3600),
    chip("Spansion",   "S25FL064P",           0x01, 0x02164D00,  128, false, 2700, 3600),
    chip("Spansion",   "S25FL256S",           0x01, 0x02194D01,  512, true,  2700, 3600),
    chip("Spansion",   "S25FL128P",           0x01, 0x20180301,  256, false, 2700, 3600),
    chip("Spansion",   "S25FL129P",           0x01, 0x20184D01,  256, false, 2700, 3600),
    chip("Spansion",   "S25FL116K",           0x01, 0x40150140,   32, false, 2700, 3600),
    chip("Spansion",   "S25FL132K",           0x01, 0x40160140,   64, false, 2700, 3600),
    chip("Spansion",   "S25FL164K",           0x01, 0x40170140,  128, false, 2700, 3600),
    // XTX
    chip("XTX",        "XT25F02E",            0x0B, 0x40120000,    4, false, 2700, 3600),
    chip("XTX",        "XT25F04D",            0x0B, 0x40130000,    8, false, 2700, 3600),
    chip("XTX",        "XT25F08B",            0x0B, 0x40140000,   16, false, 2700, 3600),
    chip("XTX",        "XT25F16B",            0x0B, 0x40150000,   32, false, 2700, 3600),
    chip("XTX",        "XT25F32F",            0x0B, 0x40160000,   64, false, 2700, 3600),
    chip("XTX",        "XT25F64F",            0x0B, 0x40170000,  128, false, 2700, 3600),
    chip("XTX",        "XT25F128F",           0x0B, 0x40180000,  256, false, 2700, 3600),
    chip("XTX",        "XT25W02E",            0x0B, 0x60120000,    4, false, 1650, 3600),
    chip("XTX",        "XT25W04D",            0x0B, 0x60130000,    8, false, 1650, 3600),
    chip("XTX",        "XT25Q08D",            0x0B, 0x60140000,   16, false, 1650, 2000),
    chip("XTX",        "XT25Q16D",            0x0B, 0x60150000,   32, false, 1650, 2000),
    chip("XTX",        "XT25Q64D",            0x0B, 0x60170000,  128, false, 1650, 2000),
    chip("XTX",        "XT25F128D",           0x0B, 0x60180000,  256, false, 1650, 2000),
    // EON
    chip("EON",        "EN25B10T",            0x1C, 0x20110000,    2, false, 2700, 3600),
    chip("EON",        "EN25B20T",            0x1C, 0x20120000,    4, false, 2700, 3600),
    chip("EON",        "EN25B40T",            0x1C, 0x20130000,    8, false, 2700, 3600),
    chip("EON",        "EN25B80T",            0x1C, 0x20140000,   16, false, 2700, 3600),
    chip("EON",        "EN25B16T",            0x1C, 0x20150000,   32, false, 2700, 3600),
    chip("EON",        "EN25B32T",            0x1C, 0x20160000,   64, false, 2700, 3600),
    chip("EON",        "EN25B64T",            0x1C, 0x20170000,  128, false, 2700, 3600),
    chip("EON",        "EN25F64",             0x1C, 0x20171C20,  128, false, 2700, 3600),
    chip("EON",        "EN25Q40A",            0x1C, 0x30130000,    8, false, 2700, 3600),
    chip("EON",        "EN25Q80B",            0x1C, 0x30140000,   16, false, 2700, 3600),
    chip("EON",        "EN25Q16",             0x1C, 0x30151C30,   32, false, 2700, 3600),
    chip("EON",        "EN25Q32C",            0x1C, 0x30160000,   64, false, 2700, 3600),
    chip("EON",        "EN25Q64",             0x1C, 0x30170000,  128, false, 2700, 3600),
    chip("EON",        "EN25Q128",            0x1C, 0x30181C30,  256, false, 2700, 3600),
    chip("EON",        "EN25F10A",            0x1C, 0x31110000,    2, false, 2700, 3600),
    chip("EON",        "EN25F20A",            0x1C, 0x31120000,    4, false, 2700, 3600),
    chip("EON",        "EN25F40",             0x1C, 0x31130000,    8, false, 2700, 3600),
    chip("EON",        "EN25F80",             0x1C, 0x31140000,   16, false, 2700, 3600),
    chip("EON",        "EN25F16",             0x1C, 0x31151C31,   32, false, 2700, 3600),
    chip("EON",        "EN25F32",             0x1C, 0x31161C30,   64, false, 2700, 3600),
    chip("EON",        "EN25S10A",            0x1C, 0x38110000,    2, false, 1650, 1950),
    chip("EON",        "EN25S20A",            0x1C, 0x38120000,    4, false, 1650, 1950),
    chip("EON",        "EN25S40A",            0x1C, 0x38130000,    8, false, 1650, 1950),
    chip("EON",        "EN25S80B",            0x1C, 0x38140000,   16, false, 1650, 1950),
    chip("EON",        "EN25S16B",            0x1C, 0x38150000,   32, false, 1650, 1950),
    chip("EON",        "EN25S64A",            0x1C, 0x38170000,  128, false, 1650, 1950),
    chip("EON",        "EN25QE32A",           0x1C, 0x41160000,   64, false, 2700, 3600),
    chip("EON",        "EN25E10A",            0x1C, 0x42110000,    2, false, 2700, 3600),
    chip("EON",        "EN25E40A",            0x1C, 0x42130000,    4, false, 2700, 3600),
    chip("EON",        "EN25SE16A",           0x1C, 0x48150000,   32, false, 1650, 1950),
    chip("EON",        "EN25SE32A",           0x1C, 0x48160000,   64, false, 1650, 1950),
    chip("EON",        "EN25T80",             0x1C, 0x51140000,   16, false, 2700, 3600),
    chip("EON",        "EN25QA32B",           0x1C, 0x60160000,   64, false, 2700, 3600),
    chip("EON",        "EN25QA64A",           0x1C, 0x60170000,  128, false, 2700, 3600),
    chip("EON",        "EN25QA128A",          0x1C, 0x60180000,  256, false, 2700, 3600),
    chip("EON",        "EN25QW16A",           0x1C, 0x61150000,   32, false, 2700, 3600),
    chip("EON",        "EN25QW32A",           0x1C, 0x61160000,   64, false, 2700, 3600),
    chip("EON",        "EN25QH16",            0x1C, 0x70151C70,   32, false, 2700, 3600),
    chip("EON",        "EN25QH32B",           0x1C, 0x70160000,   64, false, 2700, 3600),
    chip("EON",        "EN25QH64A",           0x1C, 0x70171C70,  128, false, 2700, 3600),
    chip("EON",        "EN25QH128A",          0x1C, 0x70181C70,  256, false, 2700, 3600),
    chip("EON",        "EN25Q256",            0x1C, 0x70191C70,  512, true,  2700, 3600),
    chip("EON",        "EN25QX64A",           0x1C, 0x71170000,  128, false, 2700, 3600),
    chip("EON",        "EN25QX128A",          0x1C, 0x71180000,  256, false, 2700, 3600),
    chip("EON",        "EN25QX256A",          0x1C, 0x71190000,  512, true,  2700, 3600),
    chip("EON",        "EN25QY256A",          0x1C, 0x73190000,  512, true,  2700, 3600),
    chip("EON",        "EN25SX64A",           0x1C, 0x78170000,  128, false, 1650, 1950),
    chip("EON",        "EN25SX128A",          0x1C, 0x78180000,  256, false, 1650, 1950),
    // Atmel
    chip("Atmel",      "AT26DF161",           0x1F, 0x46000000,   32, false, 2700, 3600),
    chip("Atmel",      "AT25DF321",           0x1F, 0x47000000,   64, false, 2700, 3600),
    // Micron
    chip("Micron",     "M25P10",              0x20, 0x20110000,    2, false, 2300, 3600),
    chip("Micron",     "M25P20",              0x20, 0x20120000,    4, false, 2300, 3600),
    chip("Micron",     "M25P40",              0x20, 0x20130000,    8, false, 2300, 3600),
    chip("Micron",     "M25P80",              0x20, 0x20140000,   16, false, 2700, 3600),
    chip("Micron",     "M25P016",             0x20, 0x20150000,   32, false, 2700, 3600),
    chip("Micron",     "M25P32",              0x20, 0x20160000,   64, false, 2700, 3600),
    chip("Micron",     "M25P64",              0x20, 0x20170000,  128, false, 2700, 3600),
    chip("Micron",     "M25P128",             0x20, 0x20180000,  256, false, 2700, 3600),
    // XMC
    chip("XMC",        "XM25QH10B",           0x20, 0x40110000,    2, false, 2700, 3600),
    chip("XMC",        "XM25QH20B",           0x20, 0x40120000,    4, false, 2700, 3600),
    chip("XMC",        "XM25QH40B",           0x20, 0x40130000,    8, false, 2700, 3600),
    chip("XMC",        "XM25QH80B",           0x20, 0x40140000,   16, false, 2700, 3600),
    chip("XMC",        "XM25QH16C",           0x20, 0x40150000,   32, false, 2300, 3600),
    chip("XMC",        "XM25QH32B",           0x20, 0x40160000,   64, false, 2700, 3600),
    chip("XMC",        "XM25QH64C",           0x20, 0x40170000,  128, false, 2300, 3600),
    chip("XMC",        "XM25QH128C",          0x20, 0x40182070,  256, false, 2300, 3600),
    chip("XMC",        "XM25QH256C",          0x20, 0x40190000,  512, true,  2300, 3600),
    chip("XMC",        "XM25QH512C",          0x20, 0x40200000, 1024, true,  2300, 3600),
    chip("XMC",        "XM25LU64C",           0x20, 0x41170000,  128, false, 1650, 1950),
    chip("XMC",        "XM25LU128C",          0x20, 0x41180000,  256, false, 1650, 1950),
    chip("XMC",        "XM25QU256C",          0x20, 0x41190000,  512, true,  1650, 1950),
    chip("XMC",        "XM25QU512C",          0x20, 0x41200000, 1024, true,  1650, 1950),
    chip("XMC",        "XM25QW16C",           0x20, 0x42150000,   32, false, 1650, 3600),
    chip("XMC",        "XM25QW32C",           0x20, 0x42160000,   64, false, 1650, 3600),
    chip("XMC",        "XM25QW64C",           0x20, 0x42170000,  128, false, 1650, 3600),
    chip("XMC",        "XM25QW128C",          0x20, 0x42180000,  256, false, 1650, 3600),
    chip("XMC",        "XM25QW256C",          0x20, 0x42190000,  512, true,  1650, 3600),
    chip("XMC",        "XM25QW512C",          0x20, 0x42200000, 1024, true,  1650, 3600),
    chip("XMC",        "XM25QU41B",           0x20, 0x50130000,    8, false, 1650, 1950),
    chip("XMC",        "XM25QU80B",           0x20, 0x50140000,   16, false, 1650, 1950),
    chip("XMC",        "XM25QU16C",           0x20, 0x50150000,   32, false, 1650, 1950),
    chip("XMC",        "XM25LU32C",           0x20, 0x50160000,   64, false, 1650, 1950),
    chip("XMC",        "XM25QH32A",           0x20, 0x70160000,   64, false, 2700, 3600),
    chip("XMC",        "XM25QH64A",           0x20, 0x70170000,  128, false, 2700, 3600),
    chip("XMC",        "XM25QH128A",          0x20, 0x70182070,  256, false, 2700, 3600),
    // Micron
    chip("Micron",     "N25Q032A",            0x20, 0xBA160000,   64, false, 2700, 3600),
    chip("Micron",     "N25Q064A",            0x20, 0xBA170000,  128, false, 2700, 3600),
    chip("Micron",     "N25Q128A",            0x20, 0xBA180000,  256, false, 2700, 3600),
    chip("Micron",     "N25Q256A",            0x20, 0xBA190000,  512, true,  2700, 3600),
    chip("Micron",     "MT25QL512AB",         0x20, 0xBA200000, 1024, true,  2700, 3600),
    chip("Micron",     "N25Q032A",            0x20, 0xBB160000,   64, false, 1700, 2000),
    chip("Micron",     "N25Q064A",            0x20, 0xBB170000,  128, false, 1700, 2000),
    chip("Micron",     "N25Q128A",            0x20, 0xBB180000,  256, false, 1700, 2000),
    chip("Micron",     "MT25QU256AB",         0x20, 0xBB190000,  512, true,  1700, 2000),
    chip("Micron",     "MT25QU512AB",         0x20, 0xBB200000, 1024, true,  1700, 2000),
    // AMIC
    chip("AMIC",       "A25L10PU",            0x37, 0x20110000,    2, false, 2700, 3600),
    chip("AMIC",       "A25L20PU",            0x37, 0x20120000,    4, false, 2700, 3600),
    chip("AMIC",       "A25L80PU",            0x37, 0x20140000,   16, false, 2700, 3600),
    chip("AMIC",       "A25L16PU",            0x37, 0x20150000,   32, false, 2700, 3600),
    chip("AMIC",       "A25L10PT",            0x37, 0x20210000,    2, false, 2700, 3600),
    chip("AMIC",       "A25L20PT",            0x37, 0x20220000,    4, false, 2700, 3600),
    chip("AMIC",       "A25L80PT",            0x37, 0x20240000,   16, false, 2700, 3600),
    chip("AMIC",       "A25L16PT",            0x37, 0x20250000,   32, false, 2700, 3600),
    chip("AMIC",       "A25L010",             0x37, 0x30110000,    2, false, 2700, 3600),
    chip("AMIC",       "A25L020",             0x37, 0x30120000,    4, false, 2700, 3600),
    chip("AMIC",       "A25L040",             0x37, 0x30130000,    8, false, 2700, 3600),
    chip("AMIC",       "A25L080",             0x37, 0x30140000,   16, false, 2700, 3600),
    chip("AMIC",       "A25L016",             0x37, 0x30150000,   32, false, 2700, 3600),
    chip("AMIC",       "A25L032",             0x37, 0x30160000,   64, false, 2700, 3600),
    chip("AMIC",       "A25LQ080",            0x37, 0x40140000,   16, false, 2700, 3600),
    chip("AMIC",       "A25LQ16",             0x37, 0x40150000,   32, false, 2700, 3600),
    chip("AMIC",       "A25LQ32",             0x37, 0x40160000,   64, false, 2700, 3600),
    chip("AMIC",       "A25LQ64",             0x37, 0x40170000,  128, false, 2700, 3600),
    // Excel Semi
    chip("Excel Semi", "ES25P10",             0x4A, 0x20110000,    4, false, 2700, 3600),
    chip("Excel Semi", "ES25P20",             0x4A, 0x20120000,    8, false, 2700, 3600),
    chip("Excel Semi", "ES25P40",             0x4A, 0x20130000,   16, false, 2700, 3600),
    chip("Excel Semi", "ES25P80",             0x4A, 0x20140000,   32, false, 2700, 3600),
    chip("Excel Semi", "ES25P16",             0x4A, 0x20150000,   64, false, 2700, 3600),
    chip("Excel Semi", "ES25P32",             0x4A, 0x20160000,  128, false, 2700, 3600),
    chip("Excel Semi", "ES25M40A",            0x4A, 0x32130000,   16, false, 2700, 3600),
    chip("Excel Semi", "ES25M80A",            0x4A, 0x32140000,   32, false, 2700, 3600),
    chip("Excel Semi", "ES25M16A",            0x4A, 0x32150000,   64, false, 2700, 3600),
    // Douqi
    chip("Douqi",      "DQ25Q64AS",           0x54, 0x40170000,  128, false, 2700, 3600),
    // Zbit
    chip("Zbit",       "ZB25LD10A",           0x5E, 0x10110000,    2, false, 1650, 1950),
    chip("Zbit",       "ZB25LD20A",           0x5E, 0x10120000,    4, false, 1650, 1950),
    chip("Zbit",       "ZB25LD40B",           0x5E, 0x10130000,    8, false, 1650, 1950),
    chip("Zbit",       "ZB25LD80",            0x5E, 0x10140000,   16, false, 1650, 1950),
    chip("Zbit",       "ZB25D10A",            0x5E, 0x32110000,    2, false, 2700, 3600),
    chip("Zbit",       "ZB25D20A",            0x5E, 0x32120000,    4, false, 2700, 3600),
    chip("Zbit",       "ZB25D40B",            0x5E, 0x32130000,    8, false, 2700, 3600),
    chip("Zbit",       "ZB25D80B",            0x5E, 0x32140000,   16, false, 2700, 3600),
    chip("Zbit",       "ZB25VQ16",            0x5E, 0x40150000,   32, false, 2300, 3600),
    chip("Zbit",       "ZB25VQ32",            0x5E, 0x40160000,   64, false, 2300, 3600),
    chip("Zbit",       "ZB25VQ64",            0x5E, 0x40170000,  128, false, 2300, 3600),
    chip("Zbit",       "ZB25VQ128",           0x5E, 0x40180000,  256, false, 2300, 3600),
    chip("Zbit",       "ZB25LQ16",            0x5E, 0x50150000,   32, false, 1650, 1950),
    chip("Zbit",       "ZB25LQ32",            0x5E, 0x50160000,   64, false, 1650, 1950),
    chip("Zbit",       "ZB25LQ64",            0x5E, 0x50170000,  128, false, 1650, 1950),
    chip("Zbit",       "ZB25LQ128",           0x5E, 0x50180000,  256, false, 1650, 1950),
    chip("Zbit",       "ZB25VQ20A",           0x5E, 0x60120000,    4, false, 2700, 3600),
    chip("Zbit",       "ZB25VQ40A",           0x5E, 0x60130000,    8, false, 2700, 3600),
    chip("Zbit",       "ZB25VQ80A",           0x5E, 0x60140000,   16, false, 2700, 3600),
    chip("Zbit",       "ZB25VQ16A",           0x5E, 0x60150000,   32, false, 2700, 3600),
    // ON Semi
    chip("ON Semi",    "LE25U20AMB",          0x62, 0x06120000,    4, false, 2300, 3600),
    chip("ON Semi",    "LE25U40CMC",          0x62, 0x06130000,    8, false, 2300, 3600),
    // Boya
    chip("Boya",       "BY25Q05AW",           0x68, 0x10100000,    1, false, 1650, 3600),
    chip("Boya",       "BY25Q10AW",           0x68, 0x10110000,    2, false, 1650, 3600),
    chip("Boya",       "BY25Q20BL",           0x68, 0x10120000,    4, false, 1650, 2000),
    chip("Boya",       "BY25Q40BL",           0x68, 0x10130000,    8, false, 1650, 2100),
    chip("Boya",       "BY25Q80AW",           0x68, 0x10140000,   16, false, 1650, 2000),
    chip("Boya",       "BY25Q16BL",           0x68, 0x10150000,   32, false, 1650, 2000),
    chip("Boya",       "BY25D05AS",           0x68, 0x40100000,    1, false, 2700, 3600),
    chip("Boya",       "BY25D10AS",           0x68, 0x40110000,    2, false, 2700, 3600),
    chip("Boya",       "BY25D20AS",           0x68, 0x40120000,    4, false, 2700, 3600),
    chip("Boya",       "BY25D40AS",           0x68, 0x40130000,    8, false, 2700, 3600),
    chip("Boya",       "BY25Q80BS",           0x68, 0x40140000,   16, false, 2700, 3600),
    chip("Boya",       "BY25Q16BS",           0x68, 0x40150000,   32, false, 2700, 3600),
    chip("Boya",       "BY25Q32BS",           0x68, 0x40160000,   64, false, 2700, 3600),
    chip("Boya",       "BY25Q64AS",           0x68, 0x40170000,  128, false, 2700, 3600),
    chip("Boya",       "BY25Q128AS",          0x68, 0x40180000,  256, false, 2700, 3600),
    chip("Boya",       "BY25Q256ES",          0x68, 0x40190000,  512, true,  2700, 3600),
    chip("Boya",       "BY25Q10AL",           0x68, 0x60110000,    2, false, 1650, 2000),
    chip("Boya",       "BY25Q20AL",           0x68, 0x60120000,    4, false, 1650, 2000),
    chip("Boya",       "BY25Q40AL",           0x68, 0x60130000,    8, false, 1650, 2000),
    chip("Boya",       "BY25Q32AL",           0x68, 0x60160000,   64, false, 1650, 2000),
    chip("Boya",       "BY25Q64AL",           0x68, 0x60170000,  128, false, 1650, 2000),
    chip("Boya",       "BY25Q128EL",          0x68, 0x60180000,  256, false, 1650, 2000),
    // PFLASH
    chip("PFLASH",     "Pm25LQ512B",          0x7F, 0x9D200500,    1, false, 2700, 3600),
    chip("PFLASH",     "Pm25LQ010B",          0x7F, 0x9D211000,    2, false, 2700, 3600),
    chip("PFLASH",     "Pm25LQ020B",          0x7F, 0x9D421100,    4, false, 2700, 3600),
    chip("PFLASH",     "PM25LQ016",           0x7F, 0x9D450000,   32, false, 2300, 3600),
    chip("PFLASH",     "PM25LQ032",           0x7F, 0x9D460000,   64, false, 2300, 3600),
    chip("PFLASH",     "PM25LQ064",           0x7F, 0x9D470000,  128, false, 2300, 3600),
    chip("PFLASH",     "PM25LQ128",           0x7F, 0x9D480000,  256, false, 2300, 3600),
    chip("PFLASH",     "Pm25LQ040B",          0x7F, 0x9D7E7E00,    8, false, 2700, 3600),
    // Puya
    chip("Puya",       "P25Q06H",             0x85, 0x00100000,    1, false, 2700, 3600),
    chip("Puya",       "P25Q40H",             0x85, 0x20130000,    8, false, 2700, 3600),
    chip("Puya",       "P25Q11H",             0x85, 0x40110000,    2, false, 2700, 3600),
    chip("Puya",       "P25Q21H",             0x85, 0x40120000,    4, false, 2700, 3600),
    chip("Puya",       "P25Q10H",             0x85, 0x60110000,    2, false, 2300, 3600),
    chip("Puya",       "P25Q20H",             0x85, 0x60120000,    4, false, 2300, 3600),
    chip("Puya",       "P25Q40H",             0x85, 0x60130000,    8, false, 2300, 3600),
    chip("Puya",       "P25Q80H",             0x85, 0x60140000,   16, false, 2700, 3600),
    chip("Puya",       "P25Q16H",             0x85, 0x60150000,   32, false, 2700, 3600),
    chip("Puya",       "P25Q32H",             0x85, 0x60160000,   64, false, 2700, 3600),
    chip("Puya",       "P25Q64H",             0x85, 0x60170000,  128, false, 2300, 3600),
    chip("Puya",       "P25Q128H",            0x85, 0x60180000,  256, false, 2300, 3600),
    // ESMT
    chip("ESMT",       "F25L004A",            0x8C, 0x20130000,    8, false, 2700, 3600),
    chip("ESMT",       "F25L008A",            0x8C, 0x20140000,   16, false, 2700, 3600),
    chip("ESMT",       "F25L016",             0x8C, 0x21150000,   32, false, 2700, 3600),
    chip("ESMT",       "F25L032",             0x8C, 0x21160000,   64, false, 2700, 3600),
    chip("ESMT",       "F25L064",             0x8C, 0x21170000,  128, false, 2700, 3600),
    chip("ESMT",       "F25L16QA",            0x8C, 0x41158C41,   32, false, 2700, 3600),
    chip("ESMT",       "F25L32QA",            0x8C, 0x41168C41,   64, false, 2700, 3600),
    chip("ESMT",       "F25L64QA",            0x8C, 0x41170000,  128, false, 2700, 3600),
    // ISSI
    chip("ISSI",       "IS25LQ010",           0x9D, 0x40110000,    2, false, 2300, 3600),
    chip("ISSI",       "IS25LQ020",           0x9D, 0x40120000,    4, false, 2300, 3600),
    chip("ISSI",       "IS25LP080D",          0x9D, 0x60140000,   16, false, 2300, 3600),
    chip("ISSI",       "IS25LP016D",          0x9D, 0x60150000,   32, false, 2300, 3600),
    chip("ISSI",       "IS25LP032D",          0x9D, 0x60160000,   64, false, 2300, 3600),
    chip("ISSI",       "IS25LP064D",          0x9D, 0x60170000,  128, false, 2300, 3600),
    chip("ISSI",       "IS25LP128F",          0x9D, 0x60180000,  256, false, 2300, 3600),
    chip("ISSI",       "IS25LP256D",          0x9D, 0x60190000,  512, true,  2300, 3600),
    chip("ISSI",       "IS25LP512D",          0x9D, 0x601A0000, 1024, true,  2300, 3600),
    chip("ISSI",       "IS25WP040D",          0x9D, 0x70130000,    8, false, 1650, 1950),
    chip("ISSI",       "IS25WP080D",          0x9D, 0x70140000,   16, false, 1650, 1950),
    chip("ISSI",       "IS25WP016D",          0x9D, 0x70150000,   32, false, 1650, 1950),
    chip("ISSI",       "IS25WP032D",          0x9D, 0x70160000,   64, false, 1650, 1950),
    chip("ISSI",       "IS25WP064D",          0x9D, 0x70170000,  128, false, 1650, 1950),
    chip("ISSI",       "IS25WP128F",          0x9D, 0x70180000,  256, false, 1650, 1950),
    chip("ISSI",       "IS25WP256D",          0x9D, 0x70190000,  512, true,  1650, 1950),
    chip("ISSI",       "IS25WP512D",          0x9D, 0x701A0000, 1024, true,  1650, 1950),
    // Fudan
    chip("Fudan",      "FM25W04",             0xA1, 0x28130000,    8, false, 1650, 3600),
    chip("Fudan",      "FM25W16",             0xA1, 0x28150000,   32, false, 1650, 3600),
    chip("Fudan",      "FM25W32",             0xA1, 0x28160000,   64, false, 1650, 3600),
    chip("Fudan",      "FM25W64",             0xA1, 0x28170000,  128, false, 1650, 3600),
    chip("Fudan",      "FM25W128",            0xA1, 0x28180000,  256, false, 1650, 3600),
    chip("Fudan",      "FM25Q04",             0xA1, 0x40130000,    8, false, 2700, 3600),
    chip("Fudan",      "FM25Q08",             0xA1, 0x40140000,   16, false, 2700, 3600),
    chip("Fudan",      "FM25Q16",             0xA1, 0x40150000,   32, false, 2700, 3600),
    chip("Fudan",      "FS25Q32",             0xA1, 0x40160000,   64, false, 2700, 3600),
    chip("Fudan",      "FS25Q64",             0xA1, 0x40170000,  128, false, 2700, 3600),
    chip("Fudan",      "FS25Q128",            0xA1, 0x40180000,  256, false, 2700, 3600),
    // Zetta
    chip("Zetta",      "ZD25Q64B",            0xBA, 0x32170000,  128, false, 2700, 3600),
    chip("Zetta",      "ZD25LQ128",           0xBA, 0x42180000,  256, false, 1650, 1950),
    chip("Zetta",      "ZD25LQ64",            0xBA, 0x43170000,  128, false, 1650, 1950),
    chip("Zetta",      "ZD25WD20B",           0xBA, 0x60120000,    4, false, 1650, 3600),
    chip("Zetta",      "ZD25WD40B",           0xBA, 0x60130000,    8, false, 1650, 3600),
    chip("Zetta",      "ZD25Q80C",            0xBA, 0x60140000,   16, false, 2300, 3600),
    chip("Zetta",      "ZD25Q16B",            0xBA, 0x60150000,   32, false, 2700, 3600),
    chip("Zetta",      "ZD25Q32C",            0xBA, 0x60160000,   64, false, 2700, 3600),
    // PCT
    chip("PCT",        "PCT25VF016B",         0xBF, 0x25410000,   32, false, 2700, 3600),
    chip("PCT",        "PCT25VF032B",         0xBF, 0x254A0000,   64, false, 2700, 3600),
    chip("PCT",        "PCT25VF064C",         0xBF, 0x254B0000,  128, false, 2700, 3600),
    chip("PCT",        "PCT25VF020B",         0xBF, 0x258C0000,    4, false, 2700, 3600),
    chip("PCT",        "PCT25VF040B",         0xBF, 0x258D0000,    8, false, 2700, 3600),
    chip("PCT",        "PCT25VF080B",         0xBF, 0x258E0000,   16, false, 2700, 3600),
    chip("PCT",        "PCT26VF016",          0xBF, 0x26010000,   32, false, 2700, 3600),
    chip("PCT",        "PCT26VF032",          0xBF, 0x26020000,   64, false, 2700, 3600),
    chip("PCT",        "PCT25VF010A",         0xBF, 0x49000000,    2, false, 2700, 3600),
    // Macronix
    chip("Macronix",   "MX25L8005M",          0xC2, 0x2014C220,   16, false, 2700, 3600),
    chip("Macronix",   "MX25L1605D",          0xC2, 0x2015C220,   32, false, 2700, 3600),
    chip("Macronix",   "MX25L3205D",          0xC2, 0x2016C220,   64, false, 2700, 3600),
    chip("Macronix",   "MX25L6405D",          0xC2, 0x2017C220,  128, false, 2700, 3600),
    chip("Macronix",   "MX25L12805D",         0xC2, 0x2018C220,  256, false, 2700, 3600),
    chip("Macronix",   "MX25L25635E",         0xC2, 0x2019C220,  512, true,  2700, 3600),
    chip("Macronix",   "MX25L51245G",         0xC2, 0x201AC220, 1024, true,  2700, 3600),
    chip("Macronix",   "MX25U5121E",          0xC2, 0x25300000,    1, false, 1650, 2000),
    chip("Macronix",   "MX25U1001E",          0xC2, 0x25310000,    2, false, 1650, 2000),
    chip("Macronix",   "MX25U2035F",          0xC2, 0x25320000,    4, false, 1650, 2000),
    chip("Macronix",   "MX25U4035F",          0xC2, 0x25330000,    8, false, 1650, 2000),
    chip("Macronix",   "MX25U80356",          0xC2, 0x25340000,   16, false, 1650, 2000),
    chip("Macronix",   "MX25U1632F",          0xC2, 0x25350000,   32, false, 1650, 2000),
    chip("Macronix",   "MX25U3232F",          0xC2, 0x25360000,   64, false, 1650, 2000),
    chip("Macronix",   "MX25U6432F",          0xC2, 0x25370000,  128, false, 1650, 2000),
    chip("Macronix",   "MX25U12832F",         0xC2, 0x25380000,  256, false, 1650, 2000),
    chip("Macronix",   "MX25U25643G",         0xC2, 0x25390000,  512, true,  1650, 2000),
    chip("Macronix",   "MX25U51245G",         0xC2, 0x253A0000, 1024, true,  1650, 2000),
    chip("Macronix",   "MX25R2035F",          0xC2, 0x28120000,    4, false, 1650, 3600),
    chip("Macronix",   "MX25R4035F",          0xC2, 0x28130000,    8, false, 1650, 3600),
    chip("Macronix",   "MX25R8035F",          0xC2, 0x28140000,   16, false, 1650, 3600),
    chip("Macronix",   "MX25R1635F",          0xC2, 0x28150000,   32, false, 1650, 3600),
    chip("Macronix",   "MX25R3235F",          0xC2, 0x28160000,   64, false, 1650, 3600),
    chip("Macronix",   "MX25R6435F",          0xC2, 0x28170000,  128, false, 1650, 3600),
    // GigaDevice
    chip("GigaDevice", "GD25F40",             0xC8, 0x20130000,    8, false, 2700, 3600),
    chip("GigaDevice", "GD25F80",             0xC8, 0x20140000,   16, false, 2700, 3600),
    chip("GigaDevice", "GD25D40",             0xC8, 0x30130000,    8, false, 2700, 3600),
    chip("GigaDevice", "GD25D80",             0xC8, 0x30140000,   16, false, 2700, 3600),
    chip("GigaDevice", "GD25D05C",            0xC8, 0x40100000,    1, false, 2700, 3600),
    chip("GigaDevice", "GD25D10C",            0xC8, 0x40110000,    2, false, 2700, 3600),
    chip("GigaDevice", "GD25Q20C",            0xC8, 0x40120000,    4, false, 2700, 3600),
    chip("GigaDevice", "GD25Q40C",            0xC8, 0x40130000,    8, false, 2700, 3600),
    chip("GigaDevice", "GD25Q80C",            0xC8, 0x40140000,   16, false, 2700, 3600),
    chip("GigaDevice", "GD25Q16C",            0xC8, 0x40150000,   32, false, 2700, 3600),
    chip("GigaDevice", "GD25Q32",             0xC8, 0x40160000,   64, false, 2700, 3600),
    chip("GigaDevice", "GD25Q64CSIG",         0xC8, 0x40170000,  128, false, 2700, 3600),
    chip("GigaDevice", "GD25Q128CSIG",        0xC8, 0x4018C840,  256, false, 2700, 3600),
    chip("GigaDevice", "GD25Q256CSIG",        0xC8, 0x4019C840,  512, true,  2700, 3600),
    chip("GigaDevice", "GD25LD05C",           0xC8, 0x60100000,    1, false, 1650, 2000),
    chip("GigaDevice", "GD25LD10C",           0xC8, 0x60110000,    2, false, 1650, 2000),
    chip("GigaDevice", "GD25LD20C",           0xC8, 0x60120000,    4, false, 1650, 2000),
    chip("GigaDevice", "GD25LD40C",           0xC8, 0x60130000,    8, false, 1650, 2000),
    chip("GigaDevice", "GD25LQ80C",           0xC8, 0x60140000,   16, false, 1650, 2100),
    chip("GigaDevice", "GD25LQ16C",           0xC8, 0x60150000,   32, false, 1650, 2100),
    chip("GigaDevice", "GD25LQ32E",           0xC8, 0x60160000,   64, false, 1650, 2100),
    chip("GigaDevice", "GD25LQ64E",           0xC8, 0x60170000,  128, false, 1650, 2000),
    chip("GigaDevice", "GD25LQ128",           0xC8, 0x6018C840,  256, false, 1650, 2000),
    chip("GigaDevice", "GD25LQ256D",          0xC8, 0x60190000,  512, true,  1650, 2000),
    chip("GigaDevice", "GD25WD05C",           0xC8, 0x64100000,    1, false, 1650, 3600),
    chip("GigaDevice", "GD25WD10C",           0xC8, 0x64110000,    2, false, 1650, 3600),
    chip("GigaDevice", "GD25WD20E",           0xC8, 0x64120000,    4, false, 1650, 3600),
    chip("GigaDevice", "GD25WD40E",           0xC8, 0x64130000,    8, false, 1650, 3600),
    chip("GigaDevice", "GD25WD80C",           0xC8, 0x64140000,   16, false, 1650, 3600),
    chip("GigaDevice", "GD25WQ20E",           0xC8, 0x65120000,    4, false, 1650, 3600),
    chip("GigaDevice", "GD25WQ40E",           0xC8, 0x65130000,    8, false, 1650, 3600),
    chip("GigaDevice", "GD25WQ80E",           0xC8, 0x65140000,   16, false, 1650, 3600),
    chip("GigaDevice", "GD25WQ16E",           0xC8, 0x65150000,   32, false, 1650, 3600),
    chip("GigaDevice", "GD25WQ32E",           0xC8, 0x65160000,   64, false, 1650, 3600),
    chip("GigaDevice", "GD25WQ64E",           0xC8, 0x65170000,  128, false, 1650, 3600),
    chip("GigaDevice", "GD25WQ128E",          0xC8, 0x65180000,  256, false, 1650, 3600),
    chip("GigaDevice", "GD25WB256E",          0xC8, 0x65190000,  512, true,  1650, 3600),
    chip("GigaDevice", "GD25LB512ME",         0xC8, 0x671A0000, 1024, true,  1650, 2000),
    chip("GigaDevice", "YC25Q128",            0xD8, 0x4018C840,  256, false, 2700, 3600),
    // Paragon
    chip("Paragon",    "PN25F08",             0xE0, 0x40140000,   16, false, 2700, 3600),
    chip("Paragon",    "PN25F16",             0xE0, 0x40150000,   32, false, 2700, 3600),
    chip("Paragon",    "PN25F32",             0xE0, 0x40160000,   64, false, 2700, 3600),
    chip("Paragon",    "PN25F64",             0xE0, 0x40170000,  128, false, 2700, 3600),
    chip("Paragon",    "PN25F128",            0xE0, 0x40180000,  256, false, 2700, 3600),
    // Winbond
    chip("Winbond",    "W25P80",              0xEF, 0x20140000,   16, false, 2700, 3600),
    chip("Winbond",    "W25P16",              0xEF, 0x20150000,   32, false, 2700, 3600),
    chip("Winbond",    "W25P32",              0xEF, 0x20160000,   64, false, 2700, 3600),
    chip("Winbond",    "W25X05",              0xEF, 0x30100000,    1, false, 2300, 3600),
    chip("Winbond",    "W25X10",              0xEF, 0x30110000,    2, false, 2700, 3600),
    chip("Winbond",    "W25X20",              0xEF, 0x30120000,    4, false, 2700, 3600),
    chip("Winbond",    "W25X40",              0xEF, 0x30130000,    8, false, 2700, 3600),
    chip("Winbond",    "W25X80",              0xEF, 0x30140000,   16, false, 2700, 3600),
    chip("Winbond",    "W25X16",              0xEF, 0x30150000,   32, false, 2700, 3600),
    chip("Winbond",    "W25X32VS",            0xEF, 0x30160000,   64, false, 2700, 3600),
    chip("Winbond",    "W25X64",              0xEF, 0x30170000,  128, false, 2700, 3600),
    chip("Winbond",    "W25Q20CL",            0xEF, 0x40120000,    4, false, 2300, 3600),
    chip("Winbond",    "W25Q40BV",            0xEF, 0x40130000,    8, false, 2700, 3600),
    chip("Winbond",    "W25Q80BL",            0xEF, 0x40140000,   16, false, 2300, 3600),
    chip("Winbond",    "W25Q16DV",            0xEF, 0x40150000,   32, false, 2700, 3600),
    chip("Winbond",    "W25Q32BV",            0xEF, 0x40160000,   64, false, 2700, 3600),
    chip("Winbond",    "W25Q64BV",            0xEF, 0x40170000,  128, false, 2700, 3600),
    chip("Winbond",    "W25Q128BV",           0xEF, 0x40180000,  256, false, 2700, 3600),
    chip("Winbond",    "W25Q256FV",           0xEF, 0x40190000,  512, true,  2700, 3600),
    chip("Winbond",    "W25Q20BW",            0xEF, 0x50120000,    4, false, 1650, 1950),
    chip("Winbond",    "W25Q80",              0xEF, 0x50140000,   16, false, 2300, 3600),
    chip("Winbond",    "W25Q10EW",            0xEF, 0x60110000,    2, false, 1650, 1950),
    chip("Winbond",    "W25Q20EW",            0xEF, 0x60120000,    4, false, 1650, 1950),
    chip("Winbond",    "W25Q40EW",            0xEF, 0x60130000,    8, false, 1650, 1950),
    chip("Winbond",    "W25Q80EW",            0xEF, 0x60140000,   16, false, 1650, 1950),
    chip("Winbond",    "W25Q16JW",            0xEF, 0x60150000,   32, false, 1650, 1950),
    chip("Winbond",    "W25Q32FW",            0xEF, 0x60160000,   64, false, 1650, 1950),
    chip("Winbond",    "W25Q64DW",            0xEF, 0x60170000,  128, false, 1700, 1950),
    chip("Winbond",    "W25Q128FW",           0xEF, 0x60180000,  256, false, 1650, 1950),
    chip("Winbond",    "W25Q256JW",           0xEF, 0x60190000,  512, true,  1700, 1950),
    chip("Winbond",    "W25M512JW",           0xEF, 0x61190000, 1024, true,  1700, 1950),
    chip("Winbond",    "W25Q512JV",           0xEF, 0x70200000, 1024, true,  2700, 3600),
    chip("Winbond",    "W25M512JV",           0xEF, 0x71190000, 1024, true,  2700, 3600),
    chip("Winbond",    "W25Q32JW",            0xEF, 0x80160000,   64, false, 1700, 1950),
    // Fidelix
    chip("Fidelix",    "FM25Q04A",            0xF8, 0x32130000,    8, false, 2700, 3600),
    chip("Fidelix",    "FM25Q08A",            0xF8, 0x32140000,   16, false, 2700, 3600),
    chip("Fidelix",    "FM25Q16A",            0xF8, 0x32150000,   32, false, 2700, 3600),
    chip("Fidelix",    "FM25Q32A",            0xF8, 0x32160000,   64, false, 2700, 3600),
    chip("Fidelix",    "FM25Q64A",            0xF8, 0x32170000,  128, false, 2700, 3600),
    chip("Fidelix",    "FM25Q128A",           0xF8, 0x32180000,  256, false, 2700, 3600),
    chip("Fidelix",    "FM25M04A",            0xF8, 0x42130000,    8, false, 1650, 1950),
    chip("Fidelix",    "FM25M08A",            0xF8, 0x42140000,   16, false, 1650, 1950),
    chip("Fidelix",    "FM25M16A",            0xF8, 0x42150000,   32, false, 1650, 1950),
    chip("Fidelix",    "FM25M32B",            0xF8, 0x42160000,   64, false, 1650, 1950),
    chip("Fidelix",    "FM25M64A",            0xF8, 0x42170000,  128, false, 1650, 1950),
];
