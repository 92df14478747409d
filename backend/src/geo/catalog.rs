//! Country and region catalog for coastal cleanup sites
//!
//! Bounds are coarse rectangles around each country's territory. Indian
//! coastal states carry their own tighter rectangles because the country
//! box covers a lot of inland area.

use super::{Bounds, Continent};

/// A coastal country that hosts cleanup sites
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountryProfile {
    pub name: &'static str,
    pub continent: Continent,
    /// Coastline length (km), drives how many sites are generated
    pub coastline_km: u32,
    pub bounds: Bounds,
    pub coastal_regions: &'static [&'static str],
}

/// Regional bounds, keyed by (country, region)
pub const REGION_BOUNDS: &[(&str, &str, Bounds)] = &[
    ("India", "Gujarat", Bounds::new((20.0, 24.0), (68.0, 72.0))),
    ("India", "Maharashtra", Bounds::new((15.0, 20.0), (72.0, 76.0))),
    ("India", "Goa", Bounds::new((14.5, 15.5), (73.5, 74.5))),
    ("India", "Karnataka", Bounds::new((12.0, 15.0), (74.0, 78.0))),
    ("India", "Kerala", Bounds::new((8.0, 12.0), (76.0, 77.5))),
    ("India", "Tamil Nadu", Bounds::new((8.0, 13.0), (77.0, 80.5))),
    ("India", "Andhra Pradesh", Bounds::new((12.0, 19.0), (79.0, 84.0))),
    ("India", "Odisha", Bounds::new((17.0, 21.0), (81.0, 87.0))),
    ("India", "West Bengal", Bounds::new((21.0, 23.0), (87.0, 89.0))),
    ("India", "Puducherry", Bounds::new((11.5, 12.0), (79.5, 80.0))),
    ("India", "Daman and Diu", Bounds::new((20.0, 20.5), (72.5, 73.0))),
    ("India", "Lakshadweep", Bounds::new((8.0, 12.0), (71.0, 74.0))),
    ("India", "Andaman and Nicobar Islands", Bounds::new((6.0, 14.0), (92.0, 94.0))),
];

/// Look up a country by exact name
pub fn country_profile(name: &str) -> Option<&'static CountryProfile> {
    COUNTRIES.iter().find(|profile| profile.name == name)
}

/// Look up regional bounds for a country/region pair
pub fn region_bounds(country: &str, region: &str) -> Option<Bounds> {
    REGION_BOUNDS
        .iter()
        .find(|(c, r, _)| *c == country && *r == region)
        .map(|(_, _, bounds)| *bounds)
}

/// All coastal countries, in generation order
pub const COUNTRIES: &[CountryProfile] = &[
    CountryProfile {
        name: "United States",
        continent: Continent::NorthAmerica,
        coastline_km: 19924,
        bounds: Bounds::new((24.5, 49.0), (-125.0, -66.9)),
        coastal_regions: &[
            "California",
            "Florida",
            "Texas",
            "New York",
            "Washington",
            "Oregon",
            "Louisiana",
            "Alaska",
            "Hawaii",
            "North Carolina",
            "South Carolina",
            "Georgia",
            "Virginia",
            "Maryland",
            "Delaware",
            "New Jersey",
            "Connecticut",
            "Rhode Island",
            "Massachusetts",
            "Maine",
            "New Hampshire",
        ],
    },
    CountryProfile {
        name: "Canada",
        continent: Continent::NorthAmerica,
        coastline_km: 202080,
        bounds: Bounds::new((41.7, 83.1), (-141.0, -52.6)),
        coastal_regions: &[
            "British Columbia",
            "Newfoundland and Labrador",
            "Nova Scotia",
            "New Brunswick",
            "Prince Edward Island",
            "Quebec",
            "Ontario",
            "Manitoba",
            "Saskatchewan",
            "Alberta",
            "Northwest Territories",
            "Yukon",
            "Nunavut",
        ],
    },
    CountryProfile {
        name: "Mexico",
        continent: Continent::NorthAmerica,
        coastline_km: 9330,
        bounds: Bounds::new((14.5, 32.7), (-118.4, -86.7)),
        coastal_regions: &[
            "Baja California",
            "Sonora",
            "Sinaloa",
            "Nayarit",
            "Jalisco",
            "Colima",
            "Michoacan",
            "Guerrero",
            "Oaxaca",
            "Chiapas",
            "Tabasco",
            "Campeche",
            "Yucatan",
            "Quintana Roo",
            "Tamaulipas",
            "Veracruz",
        ],
    },
    CountryProfile {
        name: "Brazil",
        continent: Continent::SouthAmerica,
        coastline_km: 7491,
        bounds: Bounds::new((-33.8, 5.3), (-73.9, -34.8)),
        coastal_regions: &[
            "Rio de Janeiro",
            "Sao Paulo",
            "Bahia",
            "Ceara",
            "Pernambuco",
            "Alagoas",
            "Sergipe",
            "Paraiba",
            "Rio Grande do Norte",
            "Maranhao",
            "Para",
            "Amapa",
            "Santa Catarina",
            "Parana",
            "Espirito Santo",
        ],
    },
    CountryProfile {
        name: "Argentina",
        continent: Continent::SouthAmerica,
        coastline_km: 4989,
        bounds: Bounds::new((-55.1, -21.8), (-73.6, -53.6)),
        coastal_regions: &["Buenos Aires", "Rio Negro", "Chubut", "Santa Cruz", "Tierra del Fuego"],
    },
    CountryProfile {
        name: "Chile",
        continent: Continent::SouthAmerica,
        coastline_km: 6435,
        bounds: Bounds::new((-56.0, -17.5), (-75.6, -66.4)),
        coastal_regions: &[
            "Arica y Parinacota",
            "Tarapaca",
            "Antofagasta",
            "Atacama",
            "Coquimbo",
            "Valparaiso",
            "Metropolitana",
            "O Higgins",
            "Maule",
            "Biobio",
            "Araucania",
            "Los Rios",
            "Los Lagos",
            "Aysen",
            "Magallanes",
        ],
    },
    CountryProfile {
        name: "Colombia",
        continent: Continent::SouthAmerica,
        coastline_km: 3208,
        bounds: Bounds::new((-4.2, 15.5), (-81.7, -66.9)),
        coastal_regions: &[
            "Atlantico",
            "Bolivar",
            "Cesar",
            "Cordoba",
            "La Guajira",
            "Magdalena",
            "Sucre",
            "Antioquia",
            "Choco",
            "Valle del Cauca",
            "Cauca",
            "Narino",
        ],
    },
    CountryProfile {
        name: "Peru",
        continent: Continent::SouthAmerica,
        coastline_km: 2414,
        bounds: Bounds::new((-18.3, -0.0), (-84.6, -68.7)),
        coastal_regions: &[
            "Tumbes",
            "Piura",
            "Lambayeque",
            "La Libertad",
            "Ancash",
            "Lima",
            "Ica",
            "Arequipa",
            "Moquegua",
            "Tacna",
        ],
    },
    CountryProfile {
        name: "Ecuador",
        continent: Continent::SouthAmerica,
        coastline_km: 2237,
        bounds: Bounds::new((-5.0, 1.7), (-92.0, -75.2)),
        coastal_regions: &["Esmeraldas", "Manabi", "Guayas", "Santa Elena", "El Oro"],
    },
    CountryProfile {
        name: "Venezuela",
        continent: Continent::SouthAmerica,
        coastline_km: 2800,
        bounds: Bounds::new((0.6, 15.9), (-73.4, -59.8)),
        coastal_regions: &[
            "Zulia",
            "Falcon",
            "Lara",
            "Yaracuy",
            "Carabobo",
            "Aragua",
            "Vargas",
            "Miranda",
            "Anzoategui",
            "Sucre",
            "Monagas",
            "Delta Amacuro",
        ],
    },
    CountryProfile {
        name: "Uruguay",
        continent: Continent::SouthAmerica,
        coastline_km: 660,
        bounds: Bounds::new((-35.0, -30.1), (-58.4, -53.1)),
        coastal_regions: &[
            "Rocha",
            "Maldonado",
            "Canelones",
            "Montevideo",
            "San Jose",
            "Colonia",
            "Soriano",
        ],
    },
    CountryProfile {
        name: "United Kingdom",
        continent: Continent::Europe,
        coastline_km: 12429,
        bounds: Bounds::new((49.9, 60.8), (-8.2, 1.8)),
        coastal_regions: &["England", "Scotland", "Wales", "Northern Ireland"],
    },
    CountryProfile {
        name: "France",
        continent: Continent::Europe,
        coastline_km: 3427,
        bounds: Bounds::new((41.3, 51.1), (-5.1, 9.6)),
        coastal_regions: &[
            "Brittany",
            "Normandy",
            "Aquitaine",
            "Provence",
            "Corsica",
            "Occitanie",
            "Nouvelle-Aquitaine",
            "Pays de la Loire",
            "Hauts-de-France",
        ],
    },
    CountryProfile {
        name: "Spain",
        continent: Continent::Europe,
        coastline_km: 4964,
        bounds: Bounds::new((27.6, 43.8), (-9.3, 4.3)),
        coastal_regions: &[
            "Galicia",
            "Asturias",
            "Cantabria",
            "Basque Country",
            "Catalonia",
            "Valencia",
            "Murcia",
            "Andalusia",
            "Balearic Islands",
            "Canary Islands",
        ],
    },
    CountryProfile {
        name: "Italy",
        continent: Continent::Europe,
        coastline_km: 7600,
        bounds: Bounds::new((35.5, 47.1), (6.6, 18.5)),
        coastal_regions: &[
            "Liguria",
            "Tuscany",
            "Lazio",
            "Campania",
            "Calabria",
            "Sicily",
            "Sardinia",
            "Apulia",
            "Abruzzo",
            "Marche",
            "Emilia-Romagna",
            "Veneto",
            "Friuli-Venezia Giulia",
        ],
    },
    CountryProfile {
        name: "Germany",
        continent: Continent::Europe,
        coastline_km: 2389,
        bounds: Bounds::new((47.3, 55.1), (5.9, 15.0)),
        coastal_regions: &[
            "Schleswig-Holstein",
            "Lower Saxony",
            "Mecklenburg-Vorpommern",
            "Hamburg",
            "Bremen",
        ],
    },
    CountryProfile {
        name: "Netherlands",
        continent: Continent::Europe,
        coastline_km: 451,
        bounds: Bounds::new((50.8, 53.6), (3.4, 7.2)),
        coastal_regions: &["North Holland", "South Holland", "Zeeland", "Friesland", "Groningen"],
    },
    CountryProfile {
        name: "Norway",
        continent: Continent::Europe,
        coastline_km: 25148,
        bounds: Bounds::new((58.0, 80.8), (4.6, 31.3)),
        coastal_regions: &[
            "Finnmark",
            "Troms",
            "Nordland",
            "Trondelag",
            "More og Romsdal",
            "Vestland",
            "Rogaland",
            "Agder",
            "Vestfold og Telemark",
            "Oslo",
            "Viken",
            "Innlandet",
        ],
    },
    CountryProfile {
        name: "Sweden",
        continent: Continent::Europe,
        coastline_km: 3218,
        bounds: Bounds::new((55.3, 69.1), (11.0, 24.2)),
        coastal_regions: &[
            "Stockholm",
            "Vastra Gotaland",
            "Skane",
            "Halland",
            "Blekinge",
            "Kalmar",
            "Kronoberg",
            "Jonkoping",
            "Ostergotland",
            "Sodermanland",
            "Uppsala",
            "Vastmanland",
            "Dalarna",
            "Gavleborg",
            "Vasternorrland",
            "Jamtland",
            "Vasterbotten",
            "Norrbotten",
        ],
    },
    CountryProfile {
        name: "Denmark",
        continent: Continent::Europe,
        coastline_km: 7314,
        bounds: Bounds::new((54.6, 57.8), (8.1, 15.2)),
        coastal_regions: &["Zealand", "Funen", "Jutland", "Bornholm"],
    },
    CountryProfile {
        name: "Portugal",
        continent: Continent::Europe,
        coastline_km: 1793,
        bounds: Bounds::new((36.9, 42.2), (-9.5, -6.2)),
        coastal_regions: &["North", "Center", "Lisbon", "Alentejo", "Algarve", "Azores", "Madeira"],
    },
    CountryProfile {
        name: "Greece",
        continent: Continent::Europe,
        coastline_km: 13676,
        bounds: Bounds::new((34.8, 41.7), (19.4, 29.7)),
        coastal_regions: &[
            "Attica",
            "Central Greece",
            "Thessaly",
            "Epirus",
            "Macedonia",
            "Thrace",
            "Peloponnese",
            "Crete",
            "Aegean Islands",
            "Ionian Islands",
        ],
    },
    CountryProfile {
        name: "Turkey",
        continent: Continent::Europe,
        coastline_km: 7200,
        bounds: Bounds::new((35.8, 42.1), (25.7, 44.8)),
        coastal_regions: &["Istanbul", "Marmara", "Aegean", "Mediterranean", "Black Sea"],
    },
    CountryProfile {
        name: "Russia",
        continent: Continent::Europe,
        coastline_km: 37653,
        bounds: Bounds::new((41.2, 81.9), (-180.0, 180.0)),
        coastal_regions: &[
            "Kaliningrad",
            "Leningrad",
            "Murmansk",
            "Arkhangelsk",
            "Karelia",
            "Komi",
            "Nenets",
            "Yamalo-Nenets",
            "Krasnoyarsk",
            "Sakha",
            "Chukotka",
            "Kamchatka",
            "Primorsky",
            "Khabarovsk",
            "Sakhalin",
            "Magadan",
            "Amur",
            "Jewish Autonomous Oblast",
        ],
    },
    CountryProfile {
        name: "China",
        continent: Continent::Asia,
        coastline_km: 14500,
        bounds: Bounds::new((18.2, 53.6), (73.6, 135.1)),
        coastal_regions: &[
            "Liaoning",
            "Hebei",
            "Tianjin",
            "Shandong",
            "Jiangsu",
            "Shanghai",
            "Zhejiang",
            "Fujian",
            "Guangdong",
            "Hainan",
            "Guangxi",
            "Hong Kong",
            "Macau",
        ],
    },
    CountryProfile {
        name: "Japan",
        continent: Continent::Asia,
        coastline_km: 29751,
        bounds: Bounds::new((24.2, 45.5), (123.0, 145.8)),
        coastal_regions: &[
            "Hokkaido",
            "Tohoku",
            "Kanto",
            "Chubu",
            "Kansai",
            "Chugoku",
            "Shikoku",
            "Kyushu",
            "Okinawa",
        ],
    },
    CountryProfile {
        name: "South Korea",
        continent: Continent::Asia,
        coastline_km: 2413,
        bounds: Bounds::new((33.1, 38.6), (124.6, 131.9)),
        coastal_regions: &[
            "Gyeonggi",
            "Incheon",
            "Gangwon",
            "Chungcheong",
            "Jeolla",
            "Gyeongsang",
            "Jeju",
        ],
    },
    CountryProfile {
        name: "India",
        continent: Continent::Asia,
        coastline_km: 7516,
        bounds: Bounds::new((6.7, 37.1), (68.2, 97.4)),
        coastal_regions: &[
            "Maharashtra",
            "Goa",
            "Karnataka",
            "Kerala",
            "Tamil Nadu",
            "Andhra Pradesh",
            "Odisha",
            "West Bengal",
            "Gujarat",
            "Daman and Diu",
            "Puducherry",
            "Lakshadweep",
            "Andaman and Nicobar Islands",
        ],
    },
    CountryProfile {
        name: "Indonesia",
        continent: Continent::Asia,
        coastline_km: 54716,
        bounds: Bounds::new((-11.0, 6.1), (95.0, 141.0)),
        coastal_regions: &[
            "Aceh",
            "North Sumatra",
            "West Sumatra",
            "Riau",
            "Riau Islands",
            "Jambi",
            "South Sumatra",
            "Bangka Belitung",
            "Lampung",
            "Banten",
            "Jakarta",
            "West Java",
            "Central Java",
            "Yogyakarta",
            "East Java",
            "Bali",
            "West Nusa Tenggara",
            "East Nusa Tenggara",
            "West Kalimantan",
            "Central Kalimantan",
            "South Kalimantan",
            "East Kalimantan",
            "North Kalimantan",
            "North Sulawesi",
            "Gorontalo",
            "Central Sulawesi",
            "West Sulawesi",
            "South Sulawesi",
            "Southeast Sulawesi",
            "North Maluku",
            "Maluku",
            "West Papua",
            "Papua",
        ],
    },
    CountryProfile {
        name: "Philippines",
        continent: Continent::Asia,
        coastline_km: 36289,
        bounds: Bounds::new((4.6, 21.1), (116.9, 126.6)),
        coastal_regions: &[
            "Ilocos",
            "Cagayan Valley",
            "Central Luzon",
            "Calabarzon",
            "Mimaropa",
            "Bicol",
            "Western Visayas",
            "Central Visayas",
            "Eastern Visayas",
            "Zamboanga Peninsula",
            "Northern Mindanao",
            "Davao",
            "Soccsksargen",
            "Caraga",
            "Bangsamoro",
            "Cordillera",
            "National Capital Region",
        ],
    },
    CountryProfile {
        name: "Thailand",
        continent: Continent::Asia,
        coastline_km: 3219,
        bounds: Bounds::new((5.6, 20.5), (97.3, 105.6)),
        coastal_regions: &["Central", "Eastern", "Western", "Southern"],
    },
    CountryProfile {
        name: "Vietnam",
        continent: Continent::Asia,
        coastline_km: 3444,
        bounds: Bounds::new((8.6, 23.4), (102.1, 109.5)),
        coastal_regions: &[
            "Red River Delta",
            "North Central Coast",
            "South Central Coast",
            "Southeast",
            "Mekong Delta",
        ],
    },
    CountryProfile {
        name: "Malaysia",
        continent: Continent::Asia,
        coastline_km: 4675,
        bounds: Bounds::new((0.9, 7.4), (99.6, 119.3)),
        coastal_regions: &[
            "Perlis",
            "Kedah",
            "Penang",
            "Perak",
            "Selangor",
            "Negeri Sembilan",
            "Malacca",
            "Johor",
            "Pahang",
            "Terengganu",
            "Kelantan",
            "Sabah",
            "Sarawak",
            "Labuan",
            "Putrajaya",
        ],
    },
    CountryProfile {
        name: "Singapore",
        continent: Continent::Asia,
        coastline_km: 193,
        bounds: Bounds::new((1.2, 1.5), (103.6, 104.0)),
        coastal_regions: &[
            "Central Region",
            "East Region",
            "North Region",
            "Northeast Region",
            "West Region",
        ],
    },
    CountryProfile {
        name: "Bangladesh",
        continent: Continent::Asia,
        coastline_km: 580,
        bounds: Bounds::new((20.7, 26.6), (88.0, 92.7)),
        coastal_regions: &[
            "Barisal",
            "Chittagong",
            "Dhaka",
            "Khulna",
            "Rajshahi",
            "Rangpur",
            "Sylhet",
        ],
    },
    CountryProfile {
        name: "Sri Lanka",
        continent: Continent::Asia,
        coastline_km: 1340,
        bounds: Bounds::new((5.9, 9.8), (79.7, 81.9)),
        coastal_regions: &[
            "Western",
            "Central",
            "Southern",
            "Northern",
            "Eastern",
            "North Western",
            "North Central",
            "Uva",
            "Sabaragamuwa",
        ],
    },
    CountryProfile {
        name: "Myanmar",
        continent: Continent::Asia,
        coastline_km: 1930,
        bounds: Bounds::new((9.8, 28.5), (92.2, 101.2)),
        coastal_regions: &["Rakhine", "Ayeyarwady", "Yangon", "Mon", "Kayin", "Tanintharyi"],
    },
    CountryProfile {
        name: "South Africa",
        continent: Continent::Africa,
        coastline_km: 2798,
        bounds: Bounds::new((-47.0, -22.1), (16.5, 32.9)),
        coastal_regions: &["Western Cape", "Eastern Cape", "KwaZulu-Natal", "Northern Cape"],
    },
    CountryProfile {
        name: "Egypt",
        continent: Continent::Africa,
        coastline_km: 2450,
        bounds: Bounds::new((22.0, 31.7), (24.7, 36.9)),
        coastal_regions: &[
            "Alexandria",
            "Beheira",
            "Kafr el-Sheikh",
            "Dakahlia",
            "Damietta",
            "Port Said",
            "Ismailia",
            "Suez",
            "North Sinai",
            "South Sinai",
            "Red Sea",
        ],
    },
    CountryProfile {
        name: "Morocco",
        continent: Continent::Africa,
        coastline_km: 1835,
        bounds: Bounds::new((21.4, 35.9), (-17.0, -1.0)),
        coastal_regions: &[
            "Tangier-Tetouan-Al Hoceima",
            "Rabat-Sale-Kenitra",
            "Casablanca-Settat",
            "Marrakech-Safi",
            "Souss-Massa",
            "Guelmim-Oued Noun",
            "Laayoune-Sakia El Hamra",
            "Dakhla-Oued Ed-Dahab",
        ],
    },
    CountryProfile {
        name: "Algeria",
        continent: Continent::Africa,
        coastline_km: 998,
        bounds: Bounds::new((18.9, 37.1), (-8.7, 12.0)),
        coastal_regions: &[
            "Tlemcen",
            "Ain Temouchent",
            "Oran",
            "Mostaganem",
            "Chlef",
            "Tipaza",
            "Algiers",
            "Boumerdes",
            "Tizi Ouzou",
            "Bejaia",
            "Jijel",
            "Skikda",
            "Annaba",
            "El Tarf",
        ],
    },
    CountryProfile {
        name: "Tunisia",
        continent: Continent::Africa,
        coastline_km: 1148,
        bounds: Bounds::new((30.2, 37.5), (7.5, 11.6)),
        coastal_regions: &[
            "Bizerte",
            "Ariana",
            "Tunis",
            "Ben Arous",
            "Nabeul",
            "Sousse",
            "Monastir",
            "Mahdia",
            "Sfax",
            "Gabes",
            "Medenine",
            "Tataouine",
        ],
    },
    CountryProfile {
        name: "Libya",
        continent: Continent::Africa,
        coastline_km: 1770,
        bounds: Bounds::new((19.5, 33.2), (9.3, 25.2)),
        coastal_regions: &["Tripolitania", "Cyrenaica", "Fezzan"],
    },
    CountryProfile {
        name: "Nigeria",
        continent: Continent::Africa,
        coastline_km: 853,
        bounds: Bounds::new((4.3, 13.9), (2.7, 14.7)),
        coastal_regions: &[
            "Lagos",
            "Ogun",
            "Ondo",
            "Edo",
            "Delta",
            "Bayelsa",
            "Rivers",
            "Akwa Ibom",
            "Cross River",
        ],
    },
    CountryProfile {
        name: "Ghana",
        continent: Continent::Africa,
        coastline_km: 539,
        bounds: Bounds::new((4.7, 11.2), (-3.3, 1.3)),
        coastal_regions: &["Greater Accra", "Central", "Western", "Volta"],
    },
    CountryProfile {
        name: "Senegal",
        continent: Continent::Africa,
        coastline_km: 531,
        bounds: Bounds::new((12.3, 16.7), (-17.5, -11.3)),
        coastal_regions: &[
            "Dakar",
            "Thies",
            "Diourbel",
            "Fatick",
            "Kaolack",
            "Kolda",
            "Ziguinchor",
            "Tambacounda",
            "Saint-Louis",
            "Matam",
            "Kaffrine",
            "Kedougou",
            "Sedhiou",
        ],
    },
    CountryProfile {
        name: "Kenya",
        continent: Continent::Africa,
        coastline_km: 536,
        bounds: Bounds::new((-4.7, 5.5), (33.9, 41.9)),
        coastal_regions: &["Mombasa", "Kwale", "Kilifi", "Tana River", "Lamu", "Taita-Taveta"],
    },
    CountryProfile {
        name: "Tanzania",
        continent: Continent::Africa,
        coastline_km: 1424,
        bounds: Bounds::new((-11.7, -0.9), (29.3, 40.3)),
        coastal_regions: &["Tanga", "Pwani", "Dar es Salaam", "Lindi", "Mtwara"],
    },
    CountryProfile {
        name: "Mozambique",
        continent: Continent::Africa,
        coastline_km: 2470,
        bounds: Bounds::new((-26.9, -10.5), (30.2, 40.8)),
        coastal_regions: &[
            "Cabo Delgado",
            "Nampula",
            "Zambezia",
            "Sofala",
            "Inhambane",
            "Gaza",
            "Maputo",
        ],
    },
    CountryProfile {
        name: "Madagascar",
        continent: Continent::Africa,
        coastline_km: 4828,
        bounds: Bounds::new((-25.6, -11.9), (43.2, 50.5)),
        coastal_regions: &[
            "Antsiranana",
            "Sava",
            "Analanjirofo",
            "Atsinanana",
            "Vatovavy-Fitovinany",
            "Atsimo-Atsinanana",
            "Vatovavy",
            "Atsimo-Andrefana",
            "Androy",
            "Anosy",
        ],
    },
    CountryProfile {
        name: "Australia",
        continent: Continent::Oceania,
        coastline_km: 25760,
        bounds: Bounds::new((-43.6, -10.7), (113.3, 153.6)),
        coastal_regions: &[
            "Western Australia",
            "South Australia",
            "Victoria",
            "Tasmania",
            "New South Wales",
            "Queensland",
            "Northern Territory",
            "Australian Capital Territory",
        ],
    },
    CountryProfile {
        name: "New Zealand",
        continent: Continent::Oceania,
        coastline_km: 15134,
        bounds: Bounds::new((-47.3, -34.4), (166.5, 178.6)),
        coastal_regions: &[
            "Northland",
            "Auckland",
            "Waikato",
            "Bay of Plenty",
            "Gisborne",
            "Hawke Bay",
            "Taranaki",
            "Manawatu-Wanganui",
            "Wellington",
            "Tasman",
            "Nelson",
            "Marlborough",
            "West Coast",
            "Canterbury",
            "Otago",
            "Southland",
        ],
    },
    CountryProfile {
        name: "Papua New Guinea",
        continent: Continent::Oceania,
        coastline_km: 5152,
        bounds: Bounds::new((-12.0, -1.0), (140.8, 159.9)),
        coastal_regions: &[
            "Central",
            "Gulf",
            "Milne Bay",
            "Oro",
            "Western",
            "West New Britain",
            "East New Britain",
            "New Ireland",
            "Manus",
            "Madang",
            "Morobe",
            "East Sepik",
            "West Sepik",
            "Sandaun",
            "Enga",
            "Southern Highlands",
            "Hela",
            "Jiwaka",
            "Chimbu",
            "Eastern Highlands",
            "Western Highlands",
        ],
    },
    CountryProfile {
        name: "Fiji",
        continent: Continent::Oceania,
        coastline_km: 1129,
        bounds: Bounds::new((-20.7, -16.0), (177.0, -178.1)),
        coastal_regions: &["Central", "Eastern", "Northern", "Western"],
    },
    CountryProfile {
        name: "Solomon Islands",
        continent: Continent::Oceania,
        coastline_km: 5313,
        bounds: Bounds::new((-11.9, -5.3), (155.5, 166.9)),
        coastal_regions: &[
            "Central",
            "Choiseul",
            "Guadalcanal",
            "Isabel",
            "Makira-Ulawa",
            "Malaita",
            "Rennell and Bellona",
            "Temotu",
            "Western",
        ],
    },
    CountryProfile {
        name: "Vanuatu",
        continent: Continent::Oceania,
        coastline_km: 2528,
        bounds: Bounds::new((-20.2, -13.1), (166.5, 170.2)),
        coastal_regions: &["Torba", "Sanma", "Penama", "Malampa", "Shefa", "Tafea"],
    },
    CountryProfile {
        name: "Samoa",
        continent: Continent::Oceania,
        coastline_km: 403,
        bounds: Bounds::new((-14.0, -13.4), (-172.8, -171.4)),
        coastal_regions: &["Upolu", "Savaii"],
    },
    CountryProfile {
        name: "Tonga",
        continent: Continent::Oceania,
        coastline_km: 419,
        bounds: Bounds::new((-24.0, -15.6), (-179.1, -173.9)),
        coastal_regions: &["Tongatapu", "Vava u", "Ha apai", "Eua", "Niuas"],
    },
    CountryProfile {
        name: "Kiribati",
        continent: Continent::Oceania,
        coastline_km: 1143,
        bounds: Bounds::new((-4.7, 4.7), (-174.5, -150.2)),
        coastal_regions: &["Gilbert Islands", "Phoenix Islands", "Line Islands"],
    },
    CountryProfile {
        name: "Marshall Islands",
        continent: Continent::Oceania,
        coastline_km: 370,
        bounds: Bounds::new((4.6, 14.7), (160.8, 172.0)),
        coastal_regions: &["Ralik Chain", "Ratak Chain"],
    },
    CountryProfile {
        name: "Micronesia",
        continent: Continent::Oceania,
        coastline_km: 6112,
        bounds: Bounds::new((1.0, 10.1), (137.3, 163.0)),
        coastal_regions: &["Yap", "Chuuk", "Pohnpei", "Kosrae"],
    },
    CountryProfile {
        name: "Palau",
        continent: Continent::Oceania,
        coastline_km: 1519,
        bounds: Bounds::new((2.9, 8.2), (131.1, 134.7)),
        coastal_regions: &[
            "Koror",
            "Aimeliik",
            "Airai",
            "Melekeok",
            "Ngaraard",
            "Ngarchelong",
            "Ngardmau",
            "Ngatpang",
            "Ngchesar",
            "Ngeremlengui",
            "Ngiwal",
            "Peleliu",
            "Sonsorol",
        ],
    },
    CountryProfile {
        name: "Tuvalu",
        continent: Continent::Oceania,
        coastline_km: 24,
        bounds: Bounds::new((-10.8, -5.6), (176.0, 179.9)),
        coastal_regions: &[
            "Funafuti",
            "Nanumanga",
            "Nanumea",
            "Niutao",
            "Nui",
            "Nukufetau",
            "Nukulaelae",
            "Vaitupu",
        ],
    },
    CountryProfile {
        name: "Nauru",
        continent: Continent::Oceania,
        coastline_km: 30,
        bounds: Bounds::new((-0.6, -0.5), (166.9, 166.9)),
        coastal_regions: &[
            "Yaren",
            "Anabar",
            "Anetan",
            "Anibare",
            "Baiti",
            "Boe",
            "Buada",
            "Denigomodu",
            "Ewa",
            "Ijuw",
            "Meneng",
            "Uaboe",
            "Ijuw",
        ],
    },
];
