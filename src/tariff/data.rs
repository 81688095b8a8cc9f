//! Built-in rate card.
//!
//! Transcribed from the carrier's published MAD tariff. Zone map entry
//! order matters: country resolution keeps the first substring match, so
//! "Niger" must stay ahead of "Nigeria" and the English aliases stay last.

use crate::zone::{Zone, ZoneEntry, ZoneTable};

use super::{OverageBand, PremiumService, RateTable, SpecialService, Tariff, WeightTier};

/// Export prices per weight tier, zones 1 through 10.
const EXPORT_TIERS: &[(f64, [f64; 10])] = &[
    (0.5, [26.00, 62.00, 26.00, 49.00, 49.00, 107.00, 49.00, 49.00, 163.00, 26.00]),
    (1.0, [50.00, 73.00, 50.00, 73.00, 73.00, 131.00, 73.00, 73.00, 187.00, 50.00]),
    (1.5, [50.00, 73.00, 50.00, 73.00, 73.00, 131.00, 73.00, 73.00, 187.00, 50.00]),
    (2.0, [50.00, 73.00, 50.00, 73.00, 73.00, 131.00, 73.00, 73.00, 187.00, 50.00]),
    (2.5, [65.00, 88.00, 74.00, 95.00, 104.00, 162.00, 111.00, 117.00, 231.00, 74.00]),
    (3.0, [80.00, 103.00, 98.00, 117.00, 135.00, 193.00, 149.00, 161.00, 275.00, 98.00]),
    (4.0, [110.00, 133.00, 139.00, 161.00, 197.00, 255.00, 224.00, 247.00, 361.00, 139.00]),
    (5.0, [140.00, 163.00, 180.00, 205.00, 259.00, 317.00, 299.00, 333.00, 447.00, 180.00]),
    (6.0, [229.00, 375.00, 356.00, 323.00, 501.00, 435.00, 417.00, 627.00, 565.00, 328.00]),
    (7.0, [318.00, 587.00, 532.00, 441.00, 743.00, 553.00, 535.00, 921.00, 683.00, 476.00]),
    (8.0, [407.00, 799.00, 708.00, 559.00, 985.00, 671.00, 653.00, 1215.00, 801.00, 624.00]),
    (9.0, [496.00, 1011.00, 884.00, 677.00, 1227.00, 789.00, 771.00, 1509.00, 919.00, 772.00]),
    (10.0, [585.00, 1223.00, 1060.00, 795.00, 1469.00, 907.00, 889.00, 1803.00, 1037.00, 920.00]),
    (11.0, [620.00, 1258.00, 1125.00, 884.00, 1567.00, 1000.00, 978.00, 1979.00, 1155.00, 967.00]),
    (12.0, [655.00, 1293.00, 1190.00, 973.00, 1665.00, 1093.00, 1067.00, 2155.00, 1273.00, 1014.00]),
    (13.0, [690.00, 1328.00, 1255.00, 1062.00, 1763.00, 1186.00, 1156.00, 2331.00, 1391.00, 1061.00]),
    (14.0, [725.00, 1363.00, 1320.00, 1151.00, 1861.00, 1279.00, 1245.00, 2507.00, 1509.00, 1108.00]),
    (15.0, [760.00, 1398.00, 1385.00, 1240.00, 1959.00, 1372.00, 1334.00, 2683.00, 1627.00, 1155.00]),
    (16.0, [795.00, 1433.00, 1450.00, 1329.00, 2057.00, 1465.00, 1423.00, 2859.00, 1745.00, 1202.00]),
    (17.0, [830.00, 1468.00, 1515.00, 1418.00, 2155.00, 1558.00, 1512.00, 3035.00, 1863.00, 1249.00]),
    (18.0, [865.00, 1503.00, 1580.00, 1507.00, 2253.00, 1651.00, 1601.00, 3211.00, 1981.00, 1296.00]),
    (19.0, [900.00, 1538.00, 1645.00, 1596.00, 2351.00, 1744.00, 1690.00, 3387.00, 2099.00, 1343.00]),
    (20.0, [935.00, 1573.00, 1710.00, 1685.00, 2449.00, 1837.00, 1779.00, 3563.00, 2217.00, 1390.00]),
    (21.0, [982.00, 1626.00, 1787.00, 1774.00, 2547.00, 1930.00, 1868.00, 3692.00, 2335.00, 1452.00]),
    (22.0, [1029.00, 1679.00, 1864.00, 1863.00, 2645.00, 2023.00, 1957.00, 3821.00, 2453.00, 1514.00]),
    (23.0, [1076.00, 1732.00, 1941.00, 1952.00, 2743.00, 2116.00, 2046.00, 3950.00, 2571.00, 1576.00]),
    (24.0, [1123.00, 1785.00, 2018.00, 2041.00, 2841.00, 2209.00, 2135.00, 4079.00, 2689.00, 1638.00]),
    (25.0, [1170.00, 1838.00, 2095.00, 2130.00, 2939.00, 2302.00, 2224.00, 4208.00, 2807.00, 1700.00]),
    (26.0, [1217.00, 1891.00, 2172.00, 2219.00, 3037.00, 2395.00, 2313.00, 4337.00, 2925.00, 1762.00]),
    (27.0, [1264.00, 1944.00, 2249.00, 2308.00, 3135.00, 2488.00, 2402.00, 4466.00, 3043.00, 1824.00]),
    (28.0, [1311.00, 1997.00, 2326.00, 2397.00, 3233.00, 2581.00, 2491.00, 4595.00, 3161.00, 1886.00]),
    (29.0, [1358.00, 2050.00, 2403.00, 2486.00, 3331.00, 2674.00, 2580.00, 4724.00, 3279.00, 1948.00]),
    (30.0, [1405.00, 2103.00, 2480.00, 2575.00, 3429.00, 2767.00, 2669.00, 4853.00, 3397.00, 2010.00]),
    (40.0, [1845.00, 2873.00, 3190.00, 3465.00, 4409.00, 3697.00, 3559.00, 5793.00, 4577.00, 2450.00]),
    (50.0, [2285.00, 3643.00, 3900.00, 4355.00, 5389.00, 4627.00, 4449.00, 6733.00, 5757.00, 2890.00]),
    (60.0, [2725.00, 4413.00, 4610.00, 5245.00, 6369.00, 5557.00, 5339.00, 7673.00, 6937.00, 3330.00]),
    (70.0, [3165.00, 5183.00, 5320.00, 6135.00, 7349.00, 6487.00, 6229.00, 8613.00, 8117.00, 3770.00]),
];

/// Import prices per weight tier, zones 1 through 9.
const IMPORT_TIERS: &[(f64, [f64; 9])] = &[
    (0.5, [15.00, 62.00, 20.00, 49.00, 49.00, 107.00, 49.00, 49.00, 150.00]),
    (1.0, [27.00, 73.00, 32.00, 73.00, 73.00, 131.00, 73.00, 73.00, 174.00]),
    (1.5, [39.00, 73.00, 44.00, 73.00, 73.00, 131.00, 73.00, 73.00, 174.00]),
    (2.0, [51.00, 73.00, 56.00, 73.00, 73.00, 131.00, 73.00, 73.00, 174.00]),
    (2.5, [66.00, 88.00, 71.00, 97.00, 104.00, 162.00, 111.00, 117.00, 218.00]),
    (3.0, [81.00, 103.00, 86.00, 121.00, 135.00, 193.00, 149.00, 161.00, 262.00]),
    (4.0, [111.00, 133.00, 116.00, 165.00, 197.00, 255.00, 224.00, 247.00, 348.00]),
    (5.0, [141.00, 163.00, 146.00, 209.00, 259.00, 317.00, 299.00, 333.00, 434.00]),
    (6.0, [226.00, 363.00, 231.00, 327.00, 501.00, 435.00, 417.00, 627.00, 552.00]),
    (7.0, [311.00, 563.00, 316.00, 445.00, 743.00, 553.00, 535.00, 921.00, 670.00]),
    (8.0, [396.00, 763.00, 401.00, 563.00, 985.00, 671.00, 653.00, 1215.00, 788.00]),
    (9.0, [481.00, 963.00, 486.00, 681.00, 1227.00, 789.00, 771.00, 1509.00, 906.00]),
    (10.0, [566.00, 1163.00, 571.00, 799.00, 1469.00, 907.00, 889.00, 1803.00, 1024.00]),
    (11.0, [598.00, 1198.00, 603.00, 888.00, 1567.00, 972.00, 978.00, 1979.00, 1124.00]),
    (12.0, [630.00, 1233.00, 635.00, 977.00, 1665.00, 1037.00, 1067.00, 2155.00, 1224.00]),
    (13.0, [662.00, 1268.00, 667.00, 1066.00, 1763.00, 1102.00, 1156.00, 2331.00, 1324.00]),
    (14.0, [694.00, 1303.00, 699.00, 1155.00, 1861.00, 1167.00, 1245.00, 2507.00, 1424.00]),
    (15.0, [726.00, 1338.00, 731.00, 1244.00, 1959.00, 1232.00, 1334.00, 2683.00, 1524.00]),
    (16.0, [758.00, 1373.00, 763.00, 1333.00, 2057.00, 1297.00, 1423.00, 2859.00, 1624.00]),
    (17.0, [790.00, 1408.00, 795.00, 1422.00, 2155.00, 1362.00, 1512.00, 3035.00, 1724.00]),
    (18.0, [822.00, 1443.00, 827.00, 1511.00, 2253.00, 1427.00, 1601.00, 3211.00, 1824.00]),
    (19.0, [854.00, 1478.00, 859.00, 1600.00, 2351.00, 1492.00, 1690.00, 3387.00, 1924.00]),
    (20.0, [886.00, 1513.00, 891.00, 1689.00, 2449.00, 1557.00, 1779.00, 3563.00, 2024.00]),
    (21.0, [918.00, 1566.00, 923.00, 1778.00, 2547.00, 1622.00, 1868.00, 3692.00, 2124.00]),
    (22.0, [950.00, 1619.00, 955.00, 1867.00, 2645.00, 1687.00, 1957.00, 3821.00, 2224.00]),
    (23.0, [982.00, 1672.00, 987.00, 1956.00, 2743.00, 1752.00, 2046.00, 3950.00, 2324.00]),
    (24.0, [1014.00, 1725.00, 1019.00, 2045.00, 2841.00, 1817.00, 2135.00, 4079.00, 2424.00]),
    (25.0, [1046.00, 1778.00, 1051.00, 2134.00, 2939.00, 1882.00, 2224.00, 4208.00, 2524.00]),
    (26.0, [1078.00, 1831.00, 1083.00, 2223.00, 3037.00, 1947.00, 2313.00, 4337.00, 2624.00]),
    (27.0, [1110.00, 1884.00, 1115.00, 2312.00, 3135.00, 2012.00, 2402.00, 4466.00, 2724.00]),
    (28.0, [1142.00, 1937.00, 1147.00, 2401.00, 3233.00, 2077.00, 2491.00, 4595.00, 2824.00]),
    (29.0, [1174.00, 1990.00, 1179.00, 2490.00, 3331.00, 2142.00, 2580.00, 4724.00, 2924.00]),
    (30.0, [1206.00, 2043.00, 1211.00, 2579.00, 3429.00, 2207.00, 2669.00, 4853.00, 3024.00]),
    (40.0, [1526.00, 2573.00, 1531.00, 3469.00, 4409.00, 2857.00, 3559.00, 5793.00, 4024.00]),
    (50.0, [1846.00, 3103.00, 1851.00, 4359.00, 5389.00, 3507.00, 4449.00, 6733.00, 5024.00]),
    (60.0, [2166.00, 3633.00, 2171.00, 5249.00, 6369.00, 4157.00, 5339.00, 7673.00, 6024.00]),
    (70.0, [2486.00, 4163.00, 2491.00, 6139.00, 7349.00, 4807.00, 6229.00, 8613.00, 7024.00]),
];

/// Export per-kg rates above the 70 kg table, anchored on the 10 kg tier.
const EXPORT_OVERAGE: &[(f64, f64, [f64; 10])] = &[
    (10.1, 20.0, [35.00, 35.00, 65.00, 89.00, 98.00, 93.00, 89.00, 176.00, 118.00, 47.00]),
    (20.1, 30.0, [47.00, 53.00, 77.00, 89.00, 98.00, 93.00, 89.00, 129.00, 118.00, 62.00]),
    (30.1, 99.99, [44.00, 77.00, 71.00, 89.00, 98.00, 93.00, 89.00, 94.00, 118.00, 44.00]),
];

/// Import per-kg rates above the 70 kg table, anchored on the 10 kg tier.
const IMPORT_OVERAGE: &[(f64, f64, [f64; 9])] = &[
    (10.1, 20.0, [32.00, 35.00, 32.00, 89.00, 98.00, 65.00, 89.00, 176.00, 100.00]),
    (20.1, 30.0, [32.00, 53.00, 32.00, 89.00, 98.00, 65.00, 89.00, 129.00, 100.00]),
    (30.1, 99.99, [32.00, 53.00, 32.00, 89.00, 98.00, 65.00, 89.00, 94.00, 100.00]),
];

const EXPORT_ZONES: &[(&str, Zone)] = &[
    // Zone 1
    ("Algérie", 1), ("Espagne", 1), ("France", 1), ("Mauritanie", 1), ("Tunisie", 1),
    // Zone 2
    ("Afghanistan", 2), ("Arabie Saoudite", 2), ("Bahrein", 2), ("Egypte", 2),
    ("Emirats Arabes Unis", 2), ("Irak", 2), ("Iran", 2), ("Jordanie", 2), ("Koweit", 2),
    ("Liban", 2), ("Libye", 2), ("Oman", 2), ("Qatar", 2), ("Syrie", 2), ("Yemen", 2),
    // Zone 3, except Allemagne and Italie which rate as zone 10 outbound
    ("Allemagne", 10), ("Andorre", 3), ("Autriche", 3), ("Belgique", 3), ("Canaries", 3),
    ("Chypre", 3), ("Crète", 3), ("Danemark", 3), ("Falklands", 3), ("Finlande", 3),
    ("Grande Bretagne", 3), ("Groenland", 3), ("Guernesey", 3), ("Irlande", 3), ("Islande", 3),
    ("Italie", 10), ("Jersey", 3), ("Liechtenstein", 3), ("Luxembourg", 3), ("Madère", 3),
    ("Malte", 3), ("Monaco", 3), ("Norvège", 3), ("Pays-Bas", 3), ("Suède", 3), ("Suisse", 3),
    ("Turquie", 3), ("Vatican", 3),
    // Zone 4
    ("Albanie", 4), ("Bielorussie", 4), ("Bosnie Herzegovine", 4), ("Bulgarie", 4), ("Chine", 4),
    ("Corée du Sud", 4), ("Croatie", 4), ("Estonie", 4), ("Feroé", 4), ("Gibraltar", 4),
    ("Hong Kong", 4), ("Hongrie", 4), ("Israël", 4), ("Japon", 4), ("Kosovo", 4),
    ("Lettonie", 4), ("Lithuanie", 4), ("Macédoine", 4), ("Moldavie", 4), ("Monténégro", 4),
    ("Pologne", 4), ("Roumanie", 4), ("Russie", 4), ("Serbie", 4), ("Slovaquie", 4),
    ("Slovénie", 4), ("Taïwan", 4), ("Tchèque", 4), ("Ukraine", 4),
    // Zone 5, except Australie (8) and Corée du Nord / Mongolie (9) outbound
    ("Afrique du Sud", 5), ("Australie", 8), ("Bangladesh", 5), ("Bhoutan", 5), ("Brunei", 5),
    ("Cambodge", 5), ("Canada", 5), ("Corée du Nord", 9), ("Guam", 5), ("Inde", 5),
    ("Indonésie", 5), ("Laos", 5), ("Malaisie", 5), ("Maldives", 5), ("Marshall", 5),
    ("Mexique", 5), ("Micronésie", 5), ("Mongolie", 9), ("N. Marianne", 5), ("Népal", 5),
    ("Pakistan", 5), ("Palaos", 5), ("Philippines", 5), ("Porto Rico", 5), ("Singapour", 5),
    ("Thaïlande", 5), ("Timor Oriental", 5), ("Vietnam", 5), ("Vierges US", 5),
    // Zone 6
    ("Etats-Unis", 6),
    // Zone 7, except Mali / Niger / Zimbabwe which rate as zone 9 outbound
    ("Angola", 7), ("Anguilla", 7), ("Antigua", 7), ("Aruba", 7), ("Azerbaijan", 7),
    ("Bahamas", 7), ("Barbades", 7), ("Belize", 7), ("Bermudes", 7), ("Bolivie", 7),
    ("Bonaire", 7), ("Botswana", 7), ("Brésil", 7), ("Burkina Faso", 7), ("Burundi", 7),
    ("Bénin", 7), ("Cameroun", 7), ("Cap Vert", 7), ("Cayman", 7), ("Chili", 7),
    ("Colombie", 7), ("Comores", 7), ("Congo", 7), ("Costa Rica", 7), ("Cuba", 7),
    ("Curaçao", 7), ("Côte d'Ivoire", 7), ("Djibouti", 7), ("Dominicaine", 7), ("Dominique", 7),
    ("El Salvador", 7), ("Equateur", 7), ("Erythrée", 7), ("Ethiopie", 7), ("Gabon", 7),
    ("Gambie", 7), ("Ghana", 7), ("Grenade", 7), ("Guadeloupe", 7), ("Guatemala", 7),
    ("Guinée Bissau", 7), ("Guinée Equatoriale", 7), ("Guinée République", 7), ("Guyana", 7),
    ("Guyane Française", 7), ("Géorgie", 7), ("Haïti", 7), ("Honduras", 7), ("Jamaïque", 7),
    ("Kazakhstan", 7), ("Kenya", 7), ("Kirghizistan", 7), ("Lesotho", 7), ("Libéria", 7),
    ("Madagascar", 7), ("Malawi", 7), ("Mali", 9), ("Martinique", 7), ("Maurice", 7),
    ("Mayotte", 7), ("Montserrat", 7), ("Mozambique", 7), ("Namibie", 7), ("Nicaragua", 7),
    ("Niger", 9), ("Nigeria", 7), ("Ouganda", 7), ("Ouzbekistan", 7), ("Panama", 7),
    ("Paraguay", 7), ("Pérou", 7), ("République Dominicaine", 7), ("Rwanda", 7), ("Réunion", 7),
    ("Saint-Martin", 7), ("Sainte Hélène", 7), ("Sainte Lucie", 7), ("Saint-Barthélemy", 7),
    ("Saint-Kitts", 7), ("Saint-Vincent", 7), ("Sao Tomé et Principe", 7), ("Seychelles", 7),
    ("Sierra Leone", 7), ("Somaliland", 7), ("St Eustache", 7), ("Sud Soudan", 7),
    ("Surinam", 7), ("Swaziland", 7), ("Sénégal", 7), ("Tadjikistan", 7), ("Tanzanie", 7),
    ("Tchad", 7), ("Togo", 7), ("Trinité et Tobago", 7), ("Turkmenistan", 7),
    ("Turks et Caicos", 7), ("Uruguay", 7), ("Vierges UK", 7), ("Zambie", 7), ("Zimbabwe", 9),
    // Zone 8, except Samoa Américaines which rates as zone 5 outbound
    ("Cook", 8), ("Fidji", 8), ("Kiribati", 8), ("Nauru", 8), ("Niue", 8),
    ("Nouvelle Calédonie", 8), ("Nouvelle Zélande", 8), ("Papouasie Nouvelle Guinée", 8),
    ("Polynésie", 8), ("Salomon", 8), ("Samoa", 8), ("Samoa Américaines", 5), ("Tonga", 8),
    ("Tuvalu", 8), ("Vanuatu", 8),
    // Zone 9
    ("Birmanie", 9), ("Centrafrique", 9), ("Congo RD", 9), ("Somalie", 9), ("Soudan", 9),
    ("Vénézuela", 9),
    // English aliases
    ("UK", 3), ("United Kingdom", 3), ("England", 3), ("Great Britain", 3),
    ("USA", 6), ("United States", 6), ("United States of America", 6),
    ("UAE", 2), ("United Arab Emirates", 2), ("Saudi Arabia", 2),
    ("Morocco", 1), ("Maroc", 1),
    ("Turkey", 3), ("Türkiye", 3), ("Istanbul", 3),
];

const IMPORT_ZONES: &[(&str, Zone)] = &[
    // Zone 1
    ("Algérie", 1), ("Espagne", 1), ("France", 1), ("Mauritanie", 1), ("Tunisie", 1),
    ("Allemagne", 1), ("Belgique", 1), ("Italie", 1), ("Liechtenstein", 1), ("Luxembourg", 1),
    ("Monaco", 1), ("Pays-Bas", 1), ("Suisse", 1), ("Vatican", 1),
    // Zone 2
    ("Afghanistan", 2), ("Arabie Saoudite", 2), ("Bahrein", 2), ("Egypte", 2),
    ("Emirats Arabes Unis", 2), ("Irak", 2), ("Iran", 2), ("Jordanie", 2), ("Koweit", 2),
    ("Liban", 2), ("Libye", 2), ("Oman", 2), ("Qatar", 2), ("Syrie", 2), ("Yemen", 2),
    // Zone 3
    ("Andorre", 3), ("Autriche", 3), ("Canaries", 3), ("Chypre", 3), ("Crète", 3),
    ("Danemark", 3), ("Falklands", 3), ("Finlande", 3), ("Grande Bretagne", 3),
    ("Groenland", 3), ("Guernesey", 3), ("Irlande", 3), ("Islande", 3), ("Jersey", 3),
    ("Madère", 3), ("Malte", 3), ("Norvège", 3), ("Suède", 3), ("Turquie", 3),
    // Zone 4
    ("Albanie", 4), ("Bielorussie", 4), ("Bosnie Herzegovine", 4), ("Bulgarie", 4), ("Chine", 4),
    ("Corée du Sud", 4), ("Croatie", 4), ("Estonie", 4), ("Feroé", 4), ("Gibraltar", 4),
    ("Hong Kong", 4), ("Hongrie", 4), ("Israël", 4), ("Japon", 4), ("Kosovo", 4),
    ("Lettonie", 4), ("Lithuanie", 4), ("Macédoine", 4), ("Moldavie", 4), ("Monténégro", 4),
    ("Pologne", 4), ("Roumanie", 4), ("Russie", 4), ("Serbie", 4), ("Slovaquie", 4),
    ("Slovénie", 4), ("Taïwan", 4), ("Tchèque", 4), ("Ukraine", 4),
    // Zone 5
    ("Afrique du Sud", 5), ("Bangladesh", 5), ("Bhoutan", 5), ("Brunei", 5), ("Cambodge", 5),
    ("Canada", 5), ("Guam", 5), ("Inde", 5), ("Indonésie", 5), ("Laos", 5), ("Malaisie", 5),
    ("Maldives", 5), ("Marshall", 5), ("Mexique", 5), ("Micronésie", 5), ("N. Marianne", 5),
    ("Népal", 5), ("Pakistan", 5), ("Palaos", 5), ("Philippines", 5), ("Porto Rico", 5),
    ("Singapour", 5), ("Thaïlande", 5), ("Timor Oriental", 5), ("Vietnam", 5),
    ("Vierges US", 5), ("Samoa Américaines", 5),
    // Zone 6
    ("Etats-Unis", 6),
    // Zone 7
    ("Angola", 7), ("Anguilla", 7), ("Antigua", 7), ("Aruba", 7), ("Azerbaijan", 7),
    ("Bahamas", 7), ("Barbades", 7), ("Belize", 7), ("Bermudes", 7), ("Bolivie", 7),
    ("Bonaire", 7), ("Botswana", 7), ("Brésil", 7), ("Burkina Faso", 7), ("Burundi", 7),
    ("Bénin", 7), ("Cameroun", 7), ("Cap Vert", 7), ("Cayman", 7), ("Chili", 7),
    ("Colombie", 7), ("Comores", 7), ("Congo", 7), ("Costa Rica", 7), ("Cuba", 7),
    ("Curaçao", 7), ("Côte d'Ivoire", 7), ("Djibouti", 7), ("Dominicaine", 7), ("Dominique", 7),
    ("El Salvador", 7), ("Equateur", 7), ("Erythrée", 7), ("Ethiopie", 7), ("Gabon", 7),
    ("Gambie", 7), ("Ghana", 7), ("Grenade", 7), ("Guadeloupe", 7), ("Guatemala", 7),
    ("Guinée Bissau", 7), ("Guinée Equatoriale", 7), ("Guinée République", 7), ("Guyana", 7),
    ("Guyane Française", 7), ("Géorgie", 7), ("Haïti", 7), ("Honduras", 7), ("Jamaïque", 7),
    ("Kazakhstan", 7), ("Kenya", 7), ("Kirghizistan", 7), ("Lesotho", 7), ("Libéria", 7),
    ("Madagascar", 7), ("Malawi", 7), ("Martinique", 7), ("Maurice", 7), ("Mayotte", 7),
    ("Montserrat", 7), ("Mozambique", 7), ("Namibie", 7), ("Nicaragua", 7), ("Nigeria", 7),
    ("Ouganda", 7), ("Ouzbekistan", 7), ("Panama", 7), ("Paraguay", 7), ("Pérou", 7),
    ("République Dominicaine", 7), ("Rwanda", 7), ("Réunion", 7), ("Saint-Martin", 7),
    ("Sainte Hélène", 7), ("Sainte Lucie", 7), ("Saint-Barthélemy", 7), ("Saint-Kitts", 7),
    ("Saint-Vincent", 7), ("Sao Tomé et Principe", 7), ("Seychelles", 7), ("Sierra Leone", 7),
    ("Somaliland", 7), ("St Eustache", 7), ("Sud Soudan", 7), ("Surinam", 7), ("Swaziland", 7),
    ("Sénégal", 7), ("Tadjikistan", 7), ("Tanzanie", 7), ("Tchad", 7), ("Togo", 7),
    ("Trinité et Tobago", 7), ("Turkmenistan", 7), ("Turks et Caicos", 7), ("Uruguay", 7),
    ("Vierges UK", 7), ("Zambie", 7),
    // Zone 8
    ("Australie", 8), ("Cook", 8), ("Fidji", 8), ("Kiribati", 8), ("Nauru", 8), ("Niue", 8),
    ("Nouvelle Calédonie", 8), ("Nouvelle Zélande", 8), ("Papouasie Nouvelle Guinée", 8),
    ("Polynésie", 8), ("Salomon", 8), ("Samoa", 8), ("Tonga", 8), ("Tuvalu", 8),
    ("Vanuatu", 8),
    // Zone 9
    ("Birmanie", 9), ("Centrafrique", 9), ("Congo RD", 9), ("Corée du Nord", 9), ("Mali", 9),
    ("Mongolie", 9), ("Niger", 9), ("Somalie", 9), ("Soudan", 9), ("Vénézuela", 9),
    ("Zimbabwe", 9),
    // English aliases
    ("UK", 3), ("United Kingdom", 3), ("England", 3), ("Great Britain", 3),
    ("USA", 6), ("United States", 6), ("United States of America", 6),
    ("UAE", 2), ("United Arab Emirates", 2), ("Saudi Arabia", 2),
    ("Morocco", 1), ("Maroc", 1),
    ("Turkey", 3), ("Türkiye", 3), ("Istanbul", 3),
];

/// Flat surcharges for timed-delivery services, in MAD.
const PREMIUM_SERVICES: &[(&str, f64)] = &[
    ("Premium 9:00", 374.50),
    ("Premium 10:30", 107.00),
    ("Premium 12:00", 53.50),
];

/// Per-kg optional services, in MAD. Catalog only.
const SPECIAL_SERVICES: &[(&str, f64)] = &[("GoGreen Plus - Carbon Reduced", 5.89)];

fn tiers<const N: usize>(rows: &[(f64, [f64; N])]) -> Vec<WeightTier> {
    rows.iter()
        .map(|(max_kg, prices)| WeightTier {
            max_kg: *max_kg,
            prices: prices.to_vec(),
        })
        .collect()
}

fn bands<const N: usize>(rows: &[(f64, f64, [f64; N])]) -> Vec<OverageBand> {
    rows.iter()
        .map(|(from_kg, to_kg, per_kg)| OverageBand {
            from_kg: *from_kg,
            to_kg: *to_kg,
            per_kg: per_kg.to_vec(),
        })
        .collect()
}

fn zone_entries(rows: &[(&str, Zone)]) -> Vec<ZoneEntry> {
    rows.iter()
        .map(|(country, zone)| ZoneEntry::new(country, *zone))
        .collect()
}

impl Tariff {
    /// Tariff built from the embedded rate card.
    pub fn builtin() -> Self {
        Tariff {
            currency: "MAD".to_string(),
            export: RateTable {
                tiers: tiers(EXPORT_TIERS),
                overage: bands(EXPORT_OVERAGE),
                overage_base_kg: 10.0,
            },
            import: RateTable {
                tiers: tiers(IMPORT_TIERS),
                overage: bands(IMPORT_OVERAGE),
                overage_base_kg: 10.0,
            },
            export_zones: ZoneTable::new(zone_entries(EXPORT_ZONES)),
            import_zones: ZoneTable::new(zone_entries(IMPORT_ZONES)),
            premium_services: PREMIUM_SERVICES
                .iter()
                .map(|(name, surcharge)| PremiumService {
                    name: name.to_string(),
                    surcharge: *surcharge,
                })
                .collect(),
            special_services: SPECIAL_SERVICES
                .iter()
                .map(|(name, per_kg)| SpecialService {
                    name: name.to_string(),
                    per_kg: *per_kg,
                })
                .collect(),
        }
    }
}
