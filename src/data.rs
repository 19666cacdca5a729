// Bundled reference dataset.
//
// Two source tables with different coverage: a mass evaluation (atomic mass
// and its uncertainty, in u) and an isotopic composition table (atom
// fractions). Ids use the zzaaam convention, Z*10000 + A*10 + m. Rows are
// merged in table order, mass table first, so a later row for the same id
// and property replaces an earlier one.
use crate::record::RawRecord;

/// Atomic masses and one-sigma uncertainties in unified atomic mass units.
///
/// Covers the stable isotopes of H through Zn plus long-lived fission
/// products, the heavy stable isotopes of Pb and Bi, and the common actinides.
/// Radioactive entries such as H3, C14 and Am242m carry a mass but no natural
/// abundance.
pub static ATOMIC_MASS_RECORDS: &[RawRecord] = &[
    // Hydrogen
    RawRecord::mass(10010, 1.00782503223, 9e-11),
    RawRecord::mass(10020, 2.01410177812, 1.2e-10),
    RawRecord::mass(10030, 3.01604928199, 2.3e-10),

    // Helium
    RawRecord::mass(20030, 3.01602932007, 6e-11),
    RawRecord::mass(20040, 4.00260325413, 1.6e-10),

    // Lithium
    RawRecord::mass(30060, 6.0151228874, 1.55e-9),
    RawRecord::mass(30070, 7.0160034366, 4.5e-9),

    // Beryllium
    RawRecord::mass(40090, 9.012183065, 8.2e-8),

    // Boron
    RawRecord::mass(50100, 10.01293695, 4.1e-7),
    RawRecord::mass(50110, 11.00930536, 4.5e-7),

    // Carbon
    RawRecord::mass(60120, 12.0, 0.0),
    RawRecord::mass(60130, 13.00335483507, 2.3e-10),
    RawRecord::mass(60140, 14.0032419884, 4e-9),

    // Nitrogen
    RawRecord::mass(70140, 14.00307400443, 2e-10),
    RawRecord::mass(70150, 15.00010889888, 6.4e-10),

    // Oxygen
    RawRecord::mass(80160, 15.99491461957, 1.7e-10),
    RawRecord::mass(80170, 16.9991317565, 6.9e-10),
    RawRecord::mass(80180, 17.99915961286, 7.6e-10),

    // Fluorine
    RawRecord::mass(90190, 18.99840316273, 9.2e-10),

    // Neon
    RawRecord::mass(100200, 19.9924401762, 1.7e-9),
    RawRecord::mass(100210, 20.993846685, 4.1e-8),
    RawRecord::mass(100220, 21.991385114, 1.8e-8),

    // Sodium
    RawRecord::mass(110230, 22.989769282, 1.9e-9),

    // Magnesium
    RawRecord::mass(120240, 23.985041697, 1.4e-8),
    RawRecord::mass(120250, 24.985836976, 5e-8),
    RawRecord::mass(120260, 25.982592968, 3.1e-8),

    // Aluminum
    RawRecord::mass(130270, 26.98153853, 1.1e-7),

    // Silicon
    RawRecord::mass(140280, 27.97692653465, 4.4e-10),
    RawRecord::mass(140290, 28.9764946649, 5.2e-10),
    RawRecord::mass(140300, 29.973770136, 2.3e-8),

    // Phosphorus
    RawRecord::mass(150310, 30.97376199842, 7e-10),

    // Sulfur
    RawRecord::mass(160320, 31.9720711744, 1.4e-9),
    RawRecord::mass(160330, 32.9714589098, 1.5e-9),
    RawRecord::mass(160340, 33.967867004, 4.7e-8),
    RawRecord::mass(160360, 35.96708071, 2e-7),

    // Chlorine
    RawRecord::mass(170350, 34.968852682, 3.7e-8),
    RawRecord::mass(170370, 36.965902602, 5.5e-8),

    // Argon
    RawRecord::mass(180360, 35.967545105, 2.8e-8),
    RawRecord::mass(180380, 37.96273211, 2.1e-7),
    RawRecord::mass(180400, 39.9623831237, 2.4e-9),

    // Potassium
    RawRecord::mass(190390, 38.9637064864, 4.9e-9),
    RawRecord::mass(190400, 39.963998166, 6e-8),
    RawRecord::mass(190410, 40.9618252579, 4.1e-9),

    // Calcium
    RawRecord::mass(200400, 39.962590863, 2.2e-8),
    RawRecord::mass(200420, 41.95861783, 1.6e-7),
    RawRecord::mass(200430, 42.95876644, 2.4e-7),
    RawRecord::mass(200440, 43.95548156, 3.5e-7),
    RawRecord::mass(200460, 45.953689, 2.4e-6),
    RawRecord::mass(200480, 47.95252276, 1.3e-7),

    // Scandium
    RawRecord::mass(210450, 44.95590828, 7.7e-7),

    // Titanium
    RawRecord::mass(220460, 45.95262772, 3.5e-7),
    RawRecord::mass(220470, 46.95175879, 3.8e-7),
    RawRecord::mass(220480, 47.94794198, 3.8e-7),
    RawRecord::mass(220490, 48.94786568, 3.9e-7),
    RawRecord::mass(220500, 49.94478689, 3.9e-7),

    // Vanadium
    RawRecord::mass(230500, 49.94715601, 9.5e-7),
    RawRecord::mass(230510, 50.94395704, 9.4e-7),

    // Chromium
    RawRecord::mass(240500, 49.94604183, 9.4e-7),
    RawRecord::mass(240520, 51.94050623, 6.3e-7),
    RawRecord::mass(240530, 52.94064815, 6.2e-7),
    RawRecord::mass(240540, 53.93887916, 6.1e-7),

    // Manganese
    RawRecord::mass(250550, 54.93804391, 4.8e-7),

    // Iron
    RawRecord::mass(260540, 53.93960899, 5.3e-7),
    RawRecord::mass(260560, 55.93493633, 4.9e-7),
    RawRecord::mass(260570, 56.93539284, 4.9e-7),
    RawRecord::mass(260580, 57.93327443, 5.3e-7),

    // Cobalt
    RawRecord::mass(270590, 58.93319429, 5.6e-7),
    RawRecord::mass(270600, 59.9338163, 5.8e-7),

    // Nickel
    RawRecord::mass(280580, 57.93534241, 5.2e-7),
    RawRecord::mass(280600, 59.93078588, 5.2e-7),
    RawRecord::mass(280610, 60.93105557, 5.2e-7),
    RawRecord::mass(280620, 61.92834537, 5.5e-7),
    RawRecord::mass(280640, 63.92796682, 5.8e-7),

    // Copper
    RawRecord::mass(290630, 62.92959772, 5.6e-7),
    RawRecord::mass(290650, 64.9277897, 7.1e-7),

    // Zinc
    RawRecord::mass(300640, 63.92914201, 7.1e-7),
    RawRecord::mass(300660, 65.92603381, 9.4e-7),
    RawRecord::mass(300670, 66.92712775, 9.6e-7),
    RawRecord::mass(300680, 67.92484455, 9.8e-7),
    RawRecord::mass(300700, 69.9253192, 2.1e-6),

    // Strontium
    RawRecord::mass(380900, 89.90772790, 1.6e-6),

    // Iodine
    RawRecord::mass(531270, 126.9044719, 3.9e-6),
    RawRecord::mass(531310, 130.9061263, 6e-7),

    // Cesium
    RawRecord::mass(551330, 132.905451961, 8e-9),
    RawRecord::mass(551370, 136.90708923, 3.3e-7),

    // Lead
    RawRecord::mass(822040, 203.973044, 1.2e-6),
    RawRecord::mass(822060, 205.9744657, 1.2e-6),
    RawRecord::mass(822070, 206.9758973, 1.2e-6),
    RawRecord::mass(822080, 207.9766525, 1.2e-6),

    // Bismuth
    RawRecord::mass(832090, 208.9803991, 1.6e-6),

    // Thorium
    RawRecord::mass(902320, 232.0380558, 2.1e-6),

    // Uranium
    RawRecord::mass(922330, 233.0396355, 2.9e-6),
    RawRecord::mass(922340, 234.0409523, 1.9e-6),
    RawRecord::mass(922350, 235.0439301, 1.9e-6),
    RawRecord::mass(922380, 238.0507884, 2e-6),

    // Neptunium
    RawRecord::mass(932370, 237.0481736, 1.9e-6),

    // Plutonium
    RawRecord::mass(942380, 238.0495601, 1.9e-6),
    RawRecord::mass(942390, 239.0521636, 1.9e-6),
    RawRecord::mass(942400, 240.0538138, 1.9e-6),
    RawRecord::mass(942410, 241.0568517, 1.9e-6),

    // Americium
    RawRecord::mass(952410, 241.0568293, 1.9e-6),
    RawRecord::mass(952420, 242.0595494, 1.9e-6),
    RawRecord::mass(952421, 242.0596016, 1.9e-6),

    // Curium
    RawRecord::mass(962440, 244.0627529, 1.9e-6),
];

/// Natural terrestrial isotopic abundances (atom fraction, summing to ~1.0
/// per element) for stable and primordial isotopes.
///
/// Elements with a single stable isotope are assigned 1.0. The leading Li6 and
/// Li7 rows are an older rounded evaluation that the later lithium rows
/// replace.
pub static NATURAL_ABUNDANCE_RECORDS: &[RawRecord] = &[
    RawRecord::abundance(30060, 0.0759),  // Li6
    RawRecord::abundance(30070, 0.9241),  // Li7

    // Hydrogen
    RawRecord::abundance(10010, 0.99984426),  // H1
    RawRecord::abundance(10020, 0.00015574),  // H2

    // Helium
    RawRecord::abundance(20030, 0.000002),  // He3
    RawRecord::abundance(20040, 0.999998),  // He4

    // Lithium
    RawRecord::abundance(30060, 0.07589),  // Li6
    RawRecord::abundance(30070, 0.92411),  // Li7

    // Beryllium
    RawRecord::abundance(40090, 1.0),  // Be9

    // Boron
    RawRecord::abundance(50100, 0.1982),  // B10
    RawRecord::abundance(50110, 0.8018),  // B11

    // Carbon
    RawRecord::abundance(60120, 0.988922),  // C12
    RawRecord::abundance(60130, 0.011078),  // C13

    // Nitrogen
    RawRecord::abundance(70140, 0.996337),  // N14
    RawRecord::abundance(70150, 0.003663),  // N15

    // Oxygen
    RawRecord::abundance(80160, 0.9976206),  // O16
    RawRecord::abundance(80170, 0.000379),  // O17
    RawRecord::abundance(80180, 0.0020004),  // O18

    // Fluorine
    RawRecord::abundance(90190, 1.0),  // F19

    // Neon
    RawRecord::abundance(100200, 0.9048),  // Ne20
    RawRecord::abundance(100210, 0.0027),  // Ne21
    RawRecord::abundance(100220, 0.0925),  // Ne22

    // Sodium
    RawRecord::abundance(110230, 1.0),  // Na23

    // Magnesium
    RawRecord::abundance(120240, 0.78951),  // Mg24
    RawRecord::abundance(120250, 0.1002),  // Mg25
    RawRecord::abundance(120260, 0.11029),  // Mg26

    // Aluminum
    RawRecord::abundance(130270, 1.0),  // Al27

    // Silicon
    RawRecord::abundance(140280, 0.9222968),  // Si28
    RawRecord::abundance(140290, 0.0468316),  // Si29
    RawRecord::abundance(140300, 0.0308716),  // Si30

    // Phosphorus
    RawRecord::abundance(150310, 1.0),  // P31

    // Sulfur
    RawRecord::abundance(160320, 0.9504074),  // S32
    RawRecord::abundance(160330, 0.0074869),  // S33
    RawRecord::abundance(160340, 0.0419599),  // S34
    RawRecord::abundance(160360, 0.0001458),  // S36

    // Chlorine
    RawRecord::abundance(170350, 0.757647),  // Cl35
    RawRecord::abundance(170370, 0.242353),  // Cl37

    // Argon
    RawRecord::abundance(180360, 0.003336),  // Ar36
    RawRecord::abundance(180380, 0.000629),  // Ar38
    RawRecord::abundance(180400, 0.996035),  // Ar40

    // Potassium
    RawRecord::abundance(190390, 0.932581),  // K39
    RawRecord::abundance(190400, 0.000117),  // K40
    RawRecord::abundance(190410, 0.067302),  // K41

    // Calcium
    RawRecord::abundance(200400, 0.96941),  // Ca40
    RawRecord::abundance(200420, 0.00647),  // Ca42
    RawRecord::abundance(200430, 0.00135),  // Ca43
    RawRecord::abundance(200440, 0.02086),  // Ca44
    RawRecord::abundance(200460, 0.00004),  // Ca46
    RawRecord::abundance(200480, 0.00187),  // Ca48

    // Scandium
    RawRecord::abundance(210450, 1.0),  // Sc45

    // Titanium
    RawRecord::abundance(220460, 0.0825),  // Ti46
    RawRecord::abundance(220470, 0.0744),  // Ti47
    RawRecord::abundance(220480, 0.7372),  // Ti48
    RawRecord::abundance(220490, 0.0541),  // Ti49
    RawRecord::abundance(220500, 0.0518),  // Ti50

    // Vanadium
    RawRecord::abundance(230500, 0.0025),  // V50
    RawRecord::abundance(230510, 0.9975),  // V51

    // Chromium
    RawRecord::abundance(240500, 0.04345),  // Cr50
    RawRecord::abundance(240520, 0.83789),  // Cr52
    RawRecord::abundance(240530, 0.09501),  // Cr53
    RawRecord::abundance(240540, 0.02365),  // Cr54

    // Manganese
    RawRecord::abundance(250550, 1.0),  // Mn55

    // Iron
    RawRecord::abundance(260540, 0.05845),  // Fe54
    RawRecord::abundance(260560, 0.91754),  // Fe56
    RawRecord::abundance(260570, 0.02119),  // Fe57
    RawRecord::abundance(260580, 0.00282),  // Fe58

    // Cobalt
    RawRecord::abundance(270590, 1.0),  // Co59

    // Nickel
    RawRecord::abundance(280580, 0.680769),  // Ni58
    RawRecord::abundance(280600, 0.262231),  // Ni60
    RawRecord::abundance(280610, 0.011399),  // Ni61
    RawRecord::abundance(280620, 0.036345),  // Ni62
    RawRecord::abundance(280640, 0.009256),  // Ni64

    // Copper
    RawRecord::abundance(290630, 0.6915),  // Cu63
    RawRecord::abundance(290650, 0.3085),  // Cu65

    // Zinc
    RawRecord::abundance(300640, 0.4917),  // Zn64
    RawRecord::abundance(300660, 0.2773),  // Zn66
    RawRecord::abundance(300670, 0.0404),  // Zn67
    RawRecord::abundance(300680, 0.1845),  // Zn68
    RawRecord::abundance(300700, 0.0061),  // Zn70

    // Gallium
    RawRecord::abundance(310690, 0.60108),  // Ga69
    RawRecord::abundance(310710, 0.39892),  // Ga71

    // Germanium
    RawRecord::abundance(320700, 0.2052),  // Ge70
    RawRecord::abundance(320720, 0.2745),  // Ge72
    RawRecord::abundance(320730, 0.0776),  // Ge73
    RawRecord::abundance(320740, 0.3652),  // Ge74
    RawRecord::abundance(320760, 0.0775),  // Ge76

    // Arsenic
    RawRecord::abundance(330750, 1.0),  // As75

    // Selenium
    RawRecord::abundance(340740, 0.0086),  // Se74
    RawRecord::abundance(340760, 0.0923),  // Se76
    RawRecord::abundance(340770, 0.076),  // Se77
    RawRecord::abundance(340780, 0.2369),  // Se78
    RawRecord::abundance(340800, 0.498),  // Se80
    RawRecord::abundance(340820, 0.0882),  // Se82

    // Bromine
    RawRecord::abundance(350790, 0.50686),  // Br79
    RawRecord::abundance(350810, 0.49314),  // Br81

    // Krypton
    RawRecord::abundance(360780, 0.00355),  // Kr78
    RawRecord::abundance(360800, 0.02286),  // Kr80
    RawRecord::abundance(360820, 0.11593),  // Kr82
    RawRecord::abundance(360830, 0.115),  // Kr83
    RawRecord::abundance(360840, 0.56987),  // Kr84
    RawRecord::abundance(360860, 0.17279),  // Kr86

    // Rubidium
    RawRecord::abundance(370850, 0.7217),  // Rb85
    RawRecord::abundance(370870, 0.2783),  // Rb87

    // Strontium
    RawRecord::abundance(380840, 0.0056),  // Sr84
    RawRecord::abundance(380860, 0.0986),  // Sr86
    RawRecord::abundance(380870, 0.07),  // Sr87
    RawRecord::abundance(380880, 0.8258),  // Sr88

    // Yttrium
    RawRecord::abundance(390890, 1.0),  // Y89

    // Zirconium
    RawRecord::abundance(400900, 0.5145),  // Zr90
    RawRecord::abundance(400910, 0.1122),  // Zr91
    RawRecord::abundance(400920, 0.1715),  // Zr92
    RawRecord::abundance(400940, 0.1738),  // Zr94
    RawRecord::abundance(400960, 0.028),  // Zr96

    // Niobium
    RawRecord::abundance(410930, 1.0),  // Nb93

    // Molybdenum
    RawRecord::abundance(420920, 0.14649),  // Mo92
    RawRecord::abundance(420940, 0.09187),  // Mo94
    RawRecord::abundance(420950, 0.15873),  // Mo95
    RawRecord::abundance(420960, 0.16673),  // Mo96
    RawRecord::abundance(420970, 0.09582),  // Mo97
    RawRecord::abundance(420980, 0.24292),  // Mo98
    RawRecord::abundance(421000, 0.09744),  // Mo100

    // Ruthenium
    RawRecord::abundance(440960, 0.0554),  // Ru96
    RawRecord::abundance(440980, 0.0187),  // Ru98
    RawRecord::abundance(440990, 0.1276),  // Ru99
    RawRecord::abundance(441000, 0.126),  // Ru100
    RawRecord::abundance(441010, 0.1706),  // Ru101
    RawRecord::abundance(441020, 0.3155),  // Ru102
    RawRecord::abundance(441040, 0.1862),  // Ru104

    // Rhodium
    RawRecord::abundance(451030, 1.0),  // Rh103

    // Palladium
    RawRecord::abundance(461020, 0.0102),  // Pd102
    RawRecord::abundance(461040, 0.1114),  // Pd104
    RawRecord::abundance(461050, 0.2233),  // Pd105
    RawRecord::abundance(461060, 0.2733),  // Pd106
    RawRecord::abundance(461080, 0.2646),  // Pd108
    RawRecord::abundance(461100, 0.1172),  // Pd110

    // Silver
    RawRecord::abundance(471070, 0.51839),  // Ag107
    RawRecord::abundance(471090, 0.48161),  // Ag109

    // Cadmium
    RawRecord::abundance(481060, 0.01245),  // Cd106
    RawRecord::abundance(481080, 0.00888),  // Cd108
    RawRecord::abundance(481100, 0.1247),  // Cd110
    RawRecord::abundance(481110, 0.12795),  // Cd111
    RawRecord::abundance(481120, 0.24109),  // Cd112
    RawRecord::abundance(481130, 0.12227),  // Cd113
    RawRecord::abundance(481140, 0.28754),  // Cd114
    RawRecord::abundance(481160, 0.07512),  // Cd116

    // Indium
    RawRecord::abundance(491130, 0.04281),  // In113
    RawRecord::abundance(491150, 0.95719),  // In115

    // Tin
    RawRecord::abundance(501120, 0.0097),  // Sn112
    RawRecord::abundance(501140, 0.0066),  // Sn114
    RawRecord::abundance(501150, 0.0034),  // Sn115
    RawRecord::abundance(501160, 0.1454),  // Sn116
    RawRecord::abundance(501170, 0.0768),  // Sn117
    RawRecord::abundance(501180, 0.2422),  // Sn118
    RawRecord::abundance(501190, 0.0859),  // Sn119
    RawRecord::abundance(501200, 0.3258),  // Sn120
    RawRecord::abundance(501220, 0.0463),  // Sn122
    RawRecord::abundance(501240, 0.0579),  // Sn124

    // Antimony
    RawRecord::abundance(511210, 0.5721),  // Sb121
    RawRecord::abundance(511230, 0.4279),  // Sb123

    // Tellurium
    RawRecord::abundance(521200, 0.0009),  // Te120
    RawRecord::abundance(521220, 0.0255),  // Te122
    RawRecord::abundance(521230, 0.0089),  // Te123
    RawRecord::abundance(521240, 0.0474),  // Te124
    RawRecord::abundance(521250, 0.0707),  // Te125
    RawRecord::abundance(521260, 0.1884),  // Te126
    RawRecord::abundance(521280, 0.3174),  // Te128
    RawRecord::abundance(521300, 0.3408),  // Te130

    // Iodine
    RawRecord::abundance(531270, 1.0),  // I127

    // Xenon
    RawRecord::abundance(541240, 0.00095),  // Xe124
    RawRecord::abundance(541260, 0.00089),  // Xe126
    RawRecord::abundance(541280, 0.0191),  // Xe128
    RawRecord::abundance(541290, 0.26401),  // Xe129
    RawRecord::abundance(541300, 0.04071),  // Xe130
    RawRecord::abundance(541310, 0.21232),  // Xe131
    RawRecord::abundance(541320, 0.26909),  // Xe132
    RawRecord::abundance(541340, 0.10436),  // Xe134
    RawRecord::abundance(541360, 0.08857),  // Xe136

    // Cesium
    RawRecord::abundance(551330, 1.0),  // Cs133

    // Barium
    RawRecord::abundance(561300, 0.0011),  // Ba130
    RawRecord::abundance(561320, 0.001),  // Ba132
    RawRecord::abundance(561340, 0.0242),  // Ba134
    RawRecord::abundance(561350, 0.0659),  // Ba135
    RawRecord::abundance(561360, 0.0785),  // Ba136
    RawRecord::abundance(561370, 0.1123),  // Ba137
    RawRecord::abundance(561380, 0.717),  // Ba138

    // Lanthanum
    RawRecord::abundance(571380, 0.0008881),  // La138
    RawRecord::abundance(571390, 0.9991119),  // La139

    // Cerium
    RawRecord::abundance(581360, 0.00186),  // Ce136
    RawRecord::abundance(581380, 0.00251),  // Ce138
    RawRecord::abundance(581400, 0.88449),  // Ce140
    RawRecord::abundance(581420, 0.11114),  // Ce142

    // Praseodymium
    RawRecord::abundance(591410, 1.0),  // Pr141

    // Neodymium
    RawRecord::abundance(601420, 0.27153),  // Nd142
    RawRecord::abundance(601430, 0.12173),  // Nd143
    RawRecord::abundance(601440, 0.23798),  // Nd144
    RawRecord::abundance(601450, 0.08293),  // Nd145
    RawRecord::abundance(601460, 0.17189),  // Nd146
    RawRecord::abundance(601480, 0.05756),  // Nd148
    RawRecord::abundance(601500, 0.05638),  // Nd150

    // Samarium
    RawRecord::abundance(621440, 0.0308),  // Sm144
    RawRecord::abundance(621470, 0.15),  // Sm147
    RawRecord::abundance(621480, 0.1125),  // Sm148
    RawRecord::abundance(621490, 0.1382),  // Sm149
    RawRecord::abundance(621500, 0.0737),  // Sm150
    RawRecord::abundance(621520, 0.2674),  // Sm152
    RawRecord::abundance(621540, 0.2274),  // Sm154

    // Europium
    RawRecord::abundance(631510, 0.4781),  // Eu151
    RawRecord::abundance(631530, 0.5219),  // Eu153

    // Gadolinium
    RawRecord::abundance(641520, 0.002),  // Gd152
    RawRecord::abundance(641540, 0.0218),  // Gd154
    RawRecord::abundance(641550, 0.148),  // Gd155
    RawRecord::abundance(641560, 0.2047),  // Gd156
    RawRecord::abundance(641570, 0.1565),  // Gd157
    RawRecord::abundance(641580, 0.2484),  // Gd158
    RawRecord::abundance(641600, 0.2186),  // Gd160

    // Terbium
    RawRecord::abundance(651590, 1.0),  // Tb159

    // Dysprosium
    RawRecord::abundance(661560, 0.00056),  // Dy156
    RawRecord::abundance(661580, 0.00095),  // Dy158
    RawRecord::abundance(661600, 0.02329),  // Dy160
    RawRecord::abundance(661610, 0.18889),  // Dy161
    RawRecord::abundance(661620, 0.25475),  // Dy162
    RawRecord::abundance(661630, 0.24896),  // Dy163
    RawRecord::abundance(661640, 0.2826),  // Dy164

    // Holmium
    RawRecord::abundance(671650, 1.0),  // Ho165

    // Erbium
    RawRecord::abundance(681620, 0.00139),  // Er162
    RawRecord::abundance(681640, 0.01601),  // Er164
    RawRecord::abundance(681660, 0.33503),  // Er166
    RawRecord::abundance(681670, 0.22869),  // Er167
    RawRecord::abundance(681680, 0.26978),  // Er168
    RawRecord::abundance(681700, 0.1491),  // Er170

    // Thulium
    RawRecord::abundance(691690, 1.0),  // Tm169

    // Ytterbium
    RawRecord::abundance(701680, 0.00123),  // Yb168
    RawRecord::abundance(701700, 0.02982),  // Yb170
    RawRecord::abundance(701710, 0.14086),  // Yb171
    RawRecord::abundance(701720, 0.21686),  // Yb172
    RawRecord::abundance(701730, 0.16103),  // Yb173
    RawRecord::abundance(701740, 0.32025),  // Yb174
    RawRecord::abundance(701760, 0.12995),  // Yb176

    // Lutetium
    RawRecord::abundance(711750, 0.97401),  // Lu175
    RawRecord::abundance(711760, 0.02599),  // Lu176

    // Hafnium
    RawRecord::abundance(721740, 0.0016),  // Hf174
    RawRecord::abundance(721760, 0.0526),  // Hf176
    RawRecord::abundance(721770, 0.186),  // Hf177
    RawRecord::abundance(721780, 0.2728),  // Hf178
    RawRecord::abundance(721790, 0.1362),  // Hf179
    RawRecord::abundance(721800, 0.3508),  // Hf180

    // Tantalum
    RawRecord::abundance(731810, 0.9998799),  // Ta181

    // Tungsten
    RawRecord::abundance(741800, 0.0012),  // W180
    RawRecord::abundance(741820, 0.265),  // W182
    RawRecord::abundance(741830, 0.1431),  // W183
    RawRecord::abundance(741840, 0.3064),  // W184
    RawRecord::abundance(741860, 0.2843),  // W186

    // Rhenium
    RawRecord::abundance(751850, 0.374),  // Re185
    RawRecord::abundance(751870, 0.626),  // Re187

    // Osmium
    RawRecord::abundance(761840, 0.0002),  // Os184
    RawRecord::abundance(761860, 0.0159),  // Os186
    RawRecord::abundance(761870, 0.0196),  // Os187
    RawRecord::abundance(761880, 0.1324),  // Os188
    RawRecord::abundance(761890, 0.1615),  // Os189
    RawRecord::abundance(761900, 0.2626),  // Os190
    RawRecord::abundance(761920, 0.4078),  // Os192

    // Iridium
    RawRecord::abundance(771910, 0.373),  // Ir191
    RawRecord::abundance(771930, 0.627),  // Ir193

    // Platinum
    RawRecord::abundance(781900, 0.00012),  // Pt190
    RawRecord::abundance(781920, 0.00782),  // Pt192
    RawRecord::abundance(781940, 0.32864),  // Pt194
    RawRecord::abundance(781950, 0.33775),  // Pt195
    RawRecord::abundance(781960, 0.25211),  // Pt196
    RawRecord::abundance(781980, 0.07356),  // Pt198

    // Gold
    RawRecord::abundance(791970, 1.0),  // Au197

    // Mercury
    RawRecord::abundance(801960, 0.0015),  // Hg196
    RawRecord::abundance(801980, 0.1004),  // Hg198
    RawRecord::abundance(801990, 0.1694),  // Hg199
    RawRecord::abundance(802000, 0.2314),  // Hg200
    RawRecord::abundance(802010, 0.1317),  // Hg201
    RawRecord::abundance(802020, 0.2974),  // Hg202
    RawRecord::abundance(802040, 0.0682),  // Hg204

    // Thallium
    RawRecord::abundance(812030, 0.29524),  // Tl203
    RawRecord::abundance(812050, 0.70476),  // Tl205

    // Lead
    RawRecord::abundance(822040, 0.014),  // Pb204
    RawRecord::abundance(822060, 0.241),  // Pb206
    RawRecord::abundance(822070, 0.221),  // Pb207
    RawRecord::abundance(822080, 0.524),  // Pb208

    // Bismuth
    RawRecord::abundance(832090, 1.0),  // Bi209

    // Thorium
    RawRecord::abundance(902300, 0.0002),  // Th230
    RawRecord::abundance(902320, 0.9998),  // Th232

    // Protactinium
    RawRecord::abundance(912310, 1.0),  // Pa231

    // Uranium
    RawRecord::abundance(922340, 0.000054),  // U234
    RawRecord::abundance(922350, 0.007204),  // U235
    RawRecord::abundance(922380, 0.992742),  // U238
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atomic_data::AtomicData;

    fn bundled() -> AtomicData {
        AtomicData::from_records(ATOMIC_MASS_RECORDS.iter().chain(NATURAL_ABUNDANCE_RECORDS))
    }

    #[test]
    fn test_lithium_natural_abundance() {
        let data = bundled();
        let li6 = data.abundance_of(30060).unwrap();
        let li7 = data.abundance_of(30070).unwrap();
        let sum = li6 + li7;
        assert!(
            (li6 - 0.07589).abs() < 1e-9,
            "Li6 abundance should come from the later row: {}",
            li6
        );
        assert!(
            (li7 - 0.92411).abs() < 1e-9,
            "Li7 abundance should come from the later row: {}",
            li7
        );
        assert!(
            (sum - 1.0).abs() < 1e-3,
            "Li6 + Li7 should sum to 1, got {}",
            sum
        );
    }

    #[test]
    fn test_mass_rows_carry_no_abundance() {
        assert!(ATOMIC_MASS_RECORDS
            .iter()
            .all(|r| r.mass.is_some() && r.mass_error.is_some() && r.abundance.is_none()));
        assert!(NATURAL_ABUNDANCE_RECORDS
            .iter()
            .all(|r| r.abundance.is_some() && r.mass.is_none()));
    }

    #[test]
    fn test_mass_is_close_to_mass_number() {
        // zzaaam: A is the middle three digits
        for record in ATOMIC_MASS_RECORDS {
            let a = (record.id.value() / 10 % 1000) as f64;
            let mass = record.mass.unwrap();
            assert!(
                (mass - a).abs() < 0.5,
                "mass {} of {} is not near A = {}",
                mass,
                record.id,
                a
            );
        }
    }

    #[test]
    fn test_carbon12_defines_the_mass_unit() {
        let data = bundled();
        assert_eq!(data.mass_of(60120).unwrap(), 12.0);
        assert_eq!(data.mass_error_of(60120).unwrap(), 0.0);
    }
}
