//! Built-in statutory reference data.
//!
//! Values are stored as scaled integers so the tables can be `const`;
//! [`super::ReferenceTables::statutory`] turns them into [`rust_decimal::Decimal`]s.

/// Scale of the redemption coefficients (thousandths).
pub(super) const REDEMPTION_RATE_SCALE: u32 = 3;

/// Redemption coefficients by age, Portaria 11/2000 layout (ages 0 to 99).
///
/// Each coefficient converts an annual pension into the lump-sum capital
/// that redeems it.
pub(super) const REDEMPTION_RATES: [(u32, i64); 100] = [
    (0, 18930),
    (1, 18908),
    (2, 18885),
    (3, 18860),
    (4, 18834),
    (5, 18807),
    (6, 18779),
    (7, 18749),
    (8, 18718),
    (9, 18685),
    (10, 18650),
    (11, 18614),
    (12, 18576),
    (13, 18537),
    (14, 18495),
    (15, 18451),
    (16, 18405),
    (17, 18358),
    (18, 18307),
    (19, 18255),
    (20, 18200),
    (21, 18142),
    (22, 18082),
    (23, 18019),
    (24, 17953),
    (25, 17884),
    (26, 17812),
    (27, 17736),
    (28, 17658),
    (29, 17575),
    (30, 17490),
    (31, 17400),
    (32, 17307),
    (33, 17209),
    (34, 17108),
    (35, 17002),
    (36, 16891),
    (37, 16777),
    (38, 16657),
    (39, 16533),
    (40, 16404),
    (41, 16270),
    (42, 16131),
    (43, 15986),
    (44, 15836),
    (45, 15681),
    (46, 15520),
    (47, 15354),
    (48, 15181),
    (49, 15003),
    (50, 14819),
    (51, 14629),
    (52, 14434),
    (53, 14232),
    (54, 14024),
    (55, 13811),
    (56, 13591),
    (57, 13366),
    (58, 13135),
    (59, 12898),
    (60, 12656),
    (61, 12409),
    (62, 12156),
    (63, 11898),
    (64, 11635),
    (65, 11368),
    (66, 11097),
    (67, 10822),
    (68, 10543),
    (69, 10260),
    (70, 9975),
    (71, 9688),
    (72, 9398),
    (73, 9107),
    (74, 8814),
    (75, 8521),
    (76, 8228),
    (77, 7936),
    (78, 7644),
    (79, 7354),
    (80, 7065),
    (81, 6779),
    (82, 6497),
    (83, 6218),
    (84, 5943),
    (85, 5672),
    (86, 5407),
    (87, 5147),
    (88, 4893),
    (89, 4646),
    (90, 4405),
    (91, 4171),
    (92, 3945),
    (93, 3726),
    (94, 3515),
    (95, 3312),
    (96, 3117),
    (97, 2931),
    (98, 2752),
    (99, 2582),
];

/// Scale of the IAS values (cents).
pub(super) const IAS_SCALE: u32 = 2;

/// Indexante de Apoios Sociais by calendar year, in euros.
pub(super) const IAS_VALUES: [(i32, i64); 19] = [
    (2007, 39786),
    (2008, 40741),
    (2009, 41922),
    (2010, 41922),
    (2011, 41922),
    (2012, 41922),
    (2013, 41922),
    (2014, 41922),
    (2015, 41922),
    (2016, 41922),
    (2017, 42132),
    (2018, 42890),
    (2019, 43576),
    (2020, 43881),
    (2021, 43881),
    (2022, 44320),
    (2023, 48043),
    (2024, 50926),
    (2025, 52250),
];

/// Scale of the revaluation coefficients (hundredths of a percentage point).
pub(super) const REVALUATION_SCALE: u32 = 2;

/// Annual revaluation coefficients for workplace-accident pensions, in percent.
///
/// Years with no update published are simply absent.
pub(super) const REVALUATION_COEFFICIENTS: [(i32, i64); 26] = [
    (2000, 250),
    (2001, 370),
    (2002, 350),
    (2003, 300),
    (2004, 250),
    (2005, 240),
    (2006, 230),
    (2007, 310),
    (2008, 240),
    (2009, 290),
    (2010, 125),
    (2011, 0),
    (2012, 310),
    (2013, 0),
    (2014, 100),
    (2015, 30),
    (2016, 40),
    (2017, 50),
    (2018, 180),
    (2019, 160),
    (2020, 70),
    (2021, 0),
    (2022, 100),
    (2023, 840),
    (2024, 600),
    (2025, 260),
];
