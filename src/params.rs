//! Compiled-in GOST R 34.10-2012 elliptic curve parameter sets.
//!
//! Every set is embedded in natural-domain form exactly as published
//! (GOST R 34.10-2012 Annex A, RFC 4357, RFC 7836,
//! R 1323565.1.024-2019); the Montgomery constants are derived at
//! compile time by [`WCurve::from_hex_params`]. The registry in
//! [`crate::oid`] exposes each set under its dotted identifier and
//! historical alias names.

use crate::arithmetic::curve::WCurve;

/// GOST R 34.10-2012 test parameter set for 256-bit keys (Annex A.1),
/// `id-tc26-gost-3410-2012-256-paramSetTest` (1.2.643.7.1.2.1.1.0).
pub static TC26_GOST_3410_2012_256_PARAM_SET_TEST: WCurve<4> = WCurve::from_hex_params(
    "8000000000000000000000000000000000000000000000000000000000000431",
    "0000000000000000000000000000000000000000000000000000000000000007",
    "5FBFF498AA938CE739B8E022FBAFEF40563F6E6A3472FC2A514C0CE9DAE23B7E",
    "8000000000000000000000000000000150FE8A1892976154C59CFC193ACCF5B3",
    "0000000000000000000000000000000000000000000000000000000000000002",
    "08E2A8A0E65147D4BD6316030E16D19C85C97F0A9CA267122B96ABBCEA7E8FC8",
    1,
);

/// 256-bit working parameter set A from R 1323565.1.024-2019,
/// `id-tc26-gost-3410-2012-256-paramSetA` (1.2.643.7.1.2.1.1.1).
/// The only 256-bit set with cofactor 4.
pub static TC26_GOST_3410_2012_256_PARAM_SET_A: WCurve<4> = WCurve::from_hex_params(
    "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFD97",
    "C2173F1513981673AF4892C23035A27CE25E2013BF95AA33B22C656F277E7335",
    "295F9BAE7428ED9CCC20E7C359A9D41A22FCCD9108E17BF7BA9337A6F8AE9513",
    "400000000000000000000000000000000FD8CDDFC87B6635C115AF556C360C67",
    "91E38443A5E82C0D880923425712B2BB658B9196932E02C78B2582FE742DAA28",
    "32879423AB1A0375895786C4BB46E9565FDE0B5344766740AF268ADB32322E5C",
    4,
);

/// 256-bit parameter set B, the RFC 4357 CryptoPro-A curve under its
/// TC26 name, `id-tc26-gost-3410-2012-256-paramSetB` (1.2.643.7.1.2.1.1.2).
pub static TC26_GOST_3410_2012_256_PARAM_SET_B: WCurve<4> = WCurve::from_hex_params(
    "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFD97",
    "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFD94",
    "00000000000000000000000000000000000000000000000000000000000000A6",
    "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF6C611070995AD10045841B09B761B893",
    "0000000000000000000000000000000000000000000000000000000000000001",
    "8D91E471E0989CDA27DF505A453F2B7635294F2DDF23E3B122ACC99C9E9F1E14",
    1,
);

/// 256-bit parameter set C, the RFC 4357 CryptoPro-B curve under its
/// TC26 name, `id-tc26-gost-3410-2012-256-paramSetC` (1.2.643.7.1.2.1.1.3).
pub static TC26_GOST_3410_2012_256_PARAM_SET_C: WCurve<4> = WCurve::from_hex_params(
    "8000000000000000000000000000000000000000000000000000000000000C99",
    "8000000000000000000000000000000000000000000000000000000000000C96",
    "3E1AF419A269A5F866A7D3C25C3DF80AE979259373FF2B182F49D4CE7E1BBC8B",
    "800000000000000000000000000000015F700CFFF1A624E5E497161BCC8A198F",
    "0000000000000000000000000000000000000000000000000000000000000001",
    "3FA8124359F96680B83D1C3EB2C070E5C545C9858D03ECFB744BF8D717717EFC",
    1,
);

/// 256-bit parameter set D, the RFC 4357 CryptoPro-C curve under its
/// TC26 name, `id-tc26-gost-3410-2012-256-paramSetD` (1.2.643.7.1.2.1.1.4).
pub static TC26_GOST_3410_2012_256_PARAM_SET_D: WCurve<4> = WCurve::from_hex_params(
    "9B9F605F5A858107AB1EC85E6B41C8AACF846E86789051D37998F7B9022D759B",
    "9B9F605F5A858107AB1EC85E6B41C8AACF846E86789051D37998F7B9022D7598",
    "000000000000000000000000000000000000000000000000000000000000805A",
    "9B9F605F5A858107AB1EC85E6B41C8AA582CA3511EDDFB74F02F3A6598980BB9",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "41ECE55743711A8C3CBF3783CD08C0EE4D4DC440D4641A8F366E550DFDB3BB67",
    1,
);

/// GOST R 34.10-2012 test parameter set for 512-bit keys (Annex A.2),
/// `id-tc26-gost-3410-2012-512-paramSetTest` (1.2.643.7.1.2.1.2.0).
pub static TC26_GOST_3410_2012_512_PARAM_SET_TEST: WCurve<8> = WCurve::from_hex_params(
    "4531ACD1FE0023C7550D267B6B2FEE80922B14B2FFB90F04D4EB7C09B5D2D15DF1D852741AF4704A0458047E80E4546D35B8336FAC224DD81664BBF528BE6373",
    "00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000007",
    "1CFF0806A31116DA29D8CFA54E57EB748BC5F377E49400FDD788B649ECA1AC4361834013B2AD7322480A89CA58E0CF74BC9E540C2ADD6897FAD0A3084F302ADC",
    "4531ACD1FE0023C7550D267B6B2FEE80922B14B2FFB90F04D4EB7C09B5D2D15DA82F2D7ECB1DBAC719905C5EECC423F1D86E25EDBE23C595D644AAF187E6E6DF",
    "24D19CC64572EE30F396BF6EBBFD7A6C5213B3B3D7057CC825F91093A68CD762FD60611262CD838DC6B60AA7EEE804E28BC849977FAC33B4B530F1B120248A9A",
    "2BB312A43BD2CE6E0D020613C857ACDDCFBF061E91E5F2C3F32447C259F39B2C83AB156D77F1496BF7EB3351E1EE4E43DC1A18B91B24640B6DBB92CB1ADD371E",
    1,
);

/// 512-bit working parameter set A from RFC 7836,
/// `id-tc26-gost-3410-2012-512-paramSetA` (1.2.643.7.1.2.1.2.1).
pub static TC26_GOST_3410_2012_512_PARAM_SET_A: WCurve<8> = WCurve::from_hex_params(
    "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFDC7",
    "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFDC4",
    "E8C2505DEDFC86DDC1BD0B2B6667F1DA34B82574761CB0E879BD081CFD0B6265EE3CB090F30D27614CB4574010DA90DD862EF9D4EBEE4761503190785A71C760",
    "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF27E69532F48D89116FF22B8D4E0560609B4B38ABFAD2B85DCACDB1411F10B275",
    "00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000003",
    "7503CFE87A836AE3A61B8816E25450E6CE5E1C93ACF1ABC1778064FDCBEFA921DF1626BE4FD036E93D75E6A50E3A41E98028FE5FC235F5B889A589CB5215F2A4",
    1,
);

/// 512-bit working parameter set B from RFC 7836,
/// `id-tc26-gost-3410-2012-512-paramSetB` (1.2.643.7.1.2.1.2.2).
pub static TC26_GOST_3410_2012_512_PARAM_SET_B: WCurve<8> = WCurve::from_hex_params(
    "8000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000006F",
    "8000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000006C",
    "687D1B459DC841457E3E06CF6F5E2517B97C7D614AF138BCBF85DC806C4B289F3E965D2DB1416D217F8B276FAD1AB69C50F78BEE1FA3106EFB8CCBC7C5140116",
    "800000000000000000000000000000000000000000000000000000000000000149A1EC142565A545ACFDB77BD9D40CFA8B996712101BEA0EC6346C54374F25BD",
    "00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000002",
    "1A8F7EDA389B094C2C071E3647A8940F3C123B697578C213BE6DD9E6C8EC7335DCB228FD1EDF4A39152CBCAAF8C0398828041055F94CEEEC7E21340780FE41BD",
    1,
);
