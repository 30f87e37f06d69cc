//! Static country and currency tables.
//!
//! Two maps back every lookup in this crate:
//!
//! - [`COUNTRIES`]: one record per ISO 3166-1 country with its ISO2/ISO3
//!   codes, English name, and currency.
//! - [`CALLING_CODES`]: international calling-code prefix to ISO2. Prefixes
//!   overlap (`"1"` covers the whole NANP, `"1242"` is the Bahamas), so
//!   callers must match by longest prefix. `"1"` resolves to `US` as the
//!   NANP default region.

/// A single country record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryRecord {
    /// ISO 3166-1 alpha-2 code.
    pub iso2: &'static str,
    /// ISO 3166-1 alpha-3 code.
    pub iso3: &'static str,
    /// English short name.
    pub name: &'static str,
    /// ISO 4217 currency code.
    pub currency_code: &'static str,
    /// Currency display name.
    pub currency_name: &'static str,
    /// Currency symbol.
    pub currency_symbol: &'static str,
}

macro_rules! country {
    ($iso2:literal, $iso3:literal, $name:literal, $code:literal, $cname:literal, $sym:literal) => {
        CountryRecord {
            iso2: $iso2,
            iso3: $iso3,
            name: $name,
            currency_code: $code,
            currency_name: $cname,
            currency_symbol: $sym,
        }
    };
}

/// All known countries, sorted by ISO2 code.
pub const COUNTRIES: &[CountryRecord] = &[
    country!("AD", "AND", "Andorra", "EUR", "Euro", "€"),
    country!("AE", "ARE", "United Arab Emirates", "AED", "UAE Dirham", "د.إ"),
    country!("AF", "AFG", "Afghanistan", "AFN", "Afghan Afghani", "؋"),
    country!("AG", "ATG", "Antigua and Barbuda", "XCD", "East Caribbean Dollar", "$"),
    country!("AI", "AIA", "Anguilla", "XCD", "East Caribbean Dollar", "$"),
    country!("AL", "ALB", "Albania", "ALL", "Albanian Lek", "L"),
    country!("AM", "ARM", "Armenia", "AMD", "Armenian Dram", "֏"),
    country!("AO", "AGO", "Angola", "AOA", "Angolan Kwanza", "Kz"),
    country!("AR", "ARG", "Argentina", "ARS", "Argentine Peso", "$"),
    country!("AS", "ASM", "American Samoa", "USD", "US Dollar", "$"),
    country!("AT", "AUT", "Austria", "EUR", "Euro", "€"),
    country!("AU", "AUS", "Australia", "AUD", "Australian Dollar", "$"),
    country!("AW", "ABW", "Aruba", "AWG", "Aruban Florin", "ƒ"),
    country!("AZ", "AZE", "Azerbaijan", "AZN", "Azerbaijani Manat", "₼"),
    country!("BA", "BIH", "Bosnia and Herzegovina", "BAM", "Convertible Mark", "KM"),
    country!("BB", "BRB", "Barbados", "BBD", "Barbadian Dollar", "$"),
    country!("BD", "BGD", "Bangladesh", "BDT", "Bangladeshi Taka", "৳"),
    country!("BE", "BEL", "Belgium", "EUR", "Euro", "€"),
    country!("BF", "BFA", "Burkina Faso", "XOF", "West African CFA Franc", "Fr"),
    country!("BG", "BGR", "Bulgaria", "BGN", "Bulgarian Lev", "лв"),
    country!("BH", "BHR", "Bahrain", "BHD", "Bahraini Dinar", ".د.ب"),
    country!("BI", "BDI", "Burundi", "BIF", "Burundian Franc", "Fr"),
    country!("BJ", "BEN", "Benin", "XOF", "West African CFA Franc", "Fr"),
    country!("BM", "BMU", "Bermuda", "BMD", "Bermudian Dollar", "$"),
    country!("BN", "BRN", "Brunei", "BND", "Brunei Dollar", "$"),
    country!("BO", "BOL", "Bolivia", "BOB", "Bolivian Boliviano", "Bs."),
    country!("BR", "BRA", "Brazil", "BRL", "Brazilian Real", "R$"),
    country!("BS", "BHS", "Bahamas", "BSD", "Bahamian Dollar", "$"),
    country!("BT", "BTN", "Bhutan", "BTN", "Bhutanese Ngultrum", "Nu."),
    country!("BW", "BWA", "Botswana", "BWP", "Botswana Pula", "P"),
    country!("BY", "BLR", "Belarus", "BYN", "Belarusian Ruble", "Br"),
    country!("BZ", "BLZ", "Belize", "BZD", "Belize Dollar", "$"),
    country!("CA", "CAN", "Canada", "CAD", "Canadian Dollar", "$"),
    country!("CD", "COD", "Congo (Democratic Republic)", "CDF", "Congolese Franc", "Fr"),
    country!("CF", "CAF", "Central African Republic", "XAF", "Central African CFA Franc", "Fr"),
    country!("CG", "COG", "Congo (Republic)", "XAF", "Central African CFA Franc", "Fr"),
    country!("CH", "CHE", "Switzerland", "CHF", "Swiss Franc", "Fr"),
    country!("CI", "CIV", "Côte d'Ivoire", "XOF", "West African CFA Franc", "Fr"),
    country!("CL", "CHL", "Chile", "CLP", "Chilean Peso", "$"),
    country!("CM", "CMR", "Cameroon", "XAF", "Central African CFA Franc", "Fr"),
    country!("CN", "CHN", "China", "CNY", "Chinese Yuan", "¥"),
    country!("CO", "COL", "Colombia", "COP", "Colombian Peso", "$"),
    country!("CR", "CRI", "Costa Rica", "CRC", "Costa Rican Colón", "₡"),
    country!("CU", "CUB", "Cuba", "CUP", "Cuban Peso", "$"),
    country!("CV", "CPV", "Cabo Verde", "CVE", "Cape Verdean Escudo", "$"),
    country!("CW", "CUW", "Curaçao", "ANG", "Netherlands Antillean Guilder", "ƒ"),
    country!("CY", "CYP", "Cyprus", "EUR", "Euro", "€"),
    country!("CZ", "CZE", "Czechia", "CZK", "Czech Koruna", "Kč"),
    country!("DE", "DEU", "Germany", "EUR", "Euro", "€"),
    country!("DJ", "DJI", "Djibouti", "DJF", "Djiboutian Franc", "Fr"),
    country!("DK", "DNK", "Denmark", "DKK", "Danish Krone", "kr"),
    country!("DM", "DMA", "Dominica", "XCD", "East Caribbean Dollar", "$"),
    country!("DO", "DOM", "Dominican Republic", "DOP", "Dominican Peso", "$"),
    country!("DZ", "DZA", "Algeria", "DZD", "Algerian Dinar", "د.ج"),
    country!("EC", "ECU", "Ecuador", "USD", "US Dollar", "$"),
    country!("EE", "EST", "Estonia", "EUR", "Euro", "€"),
    country!("EG", "EGY", "Egypt", "EGP", "Egyptian Pound", "£"),
    country!("ER", "ERI", "Eritrea", "ERN", "Eritrean Nakfa", "Nfk"),
    country!("ES", "ESP", "Spain", "EUR", "Euro", "€"),
    country!("ET", "ETH", "Ethiopia", "ETB", "Ethiopian Birr", "Br"),
    country!("FI", "FIN", "Finland", "EUR", "Euro", "€"),
    country!("FJ", "FJI", "Fiji", "FJD", "Fijian Dollar", "$"),
    country!("FM", "FSM", "Micronesia", "USD", "US Dollar", "$"),
    country!("FR", "FRA", "France", "EUR", "Euro", "€"),
    country!("GA", "GAB", "Gabon", "XAF", "Central African CFA Franc", "Fr"),
    country!("GB", "GBR", "United Kingdom", "GBP", "Pound Sterling", "£"),
    country!("GD", "GRD", "Grenada", "XCD", "East Caribbean Dollar", "$"),
    country!("GE", "GEO", "Georgia", "GEL", "Georgian Lari", "₾"),
    country!("GH", "GHA", "Ghana", "GHS", "Ghanaian Cedi", "₵"),
    country!("GI", "GIB", "Gibraltar", "GIP", "Gibraltar Pound", "£"),
    country!("GM", "GMB", "Gambia", "GMD", "Gambian Dalasi", "D"),
    country!("GN", "GIN", "Guinea", "GNF", "Guinean Franc", "Fr"),
    country!("GQ", "GNQ", "Equatorial Guinea", "XAF", "Central African CFA Franc", "Fr"),
    country!("GR", "GRC", "Greece", "EUR", "Euro", "€"),
    country!("GT", "GTM", "Guatemala", "GTQ", "Guatemalan Quetzal", "Q"),
    country!("GU", "GUM", "Guam", "USD", "US Dollar", "$"),
    country!("GW", "GNB", "Guinea-Bissau", "XOF", "West African CFA Franc", "Fr"),
    country!("GY", "GUY", "Guyana", "GYD", "Guyanese Dollar", "$"),
    country!("HK", "HKG", "Hong Kong", "HKD", "Hong Kong Dollar", "$"),
    country!("HN", "HND", "Honduras", "HNL", "Honduran Lempira", "L"),
    country!("HR", "HRV", "Croatia", "EUR", "Euro", "€"),
    country!("HT", "HTI", "Haiti", "HTG", "Haitian Gourde", "G"),
    country!("HU", "HUN", "Hungary", "HUF", "Hungarian Forint", "Ft"),
    country!("ID", "IDN", "Indonesia", "IDR", "Indonesian Rupiah", "Rp"),
    country!("IE", "IRL", "Ireland", "EUR", "Euro", "€"),
    country!("IL", "ISR", "Israel", "ILS", "Israeli New Shekel", "₪"),
    country!("IN", "IND", "India", "INR", "Indian Rupee", "₹"),
    country!("IQ", "IRQ", "Iraq", "IQD", "Iraqi Dinar", "ع.د"),
    country!("IR", "IRN", "Iran", "IRR", "Iranian Rial", "﷼"),
    country!("IS", "ISL", "Iceland", "ISK", "Icelandic Króna", "kr"),
    country!("IT", "ITA", "Italy", "EUR", "Euro", "€"),
    country!("JM", "JAM", "Jamaica", "JMD", "Jamaican Dollar", "$"),
    country!("JO", "JOR", "Jordan", "JOD", "Jordanian Dinar", "د.ا"),
    country!("JP", "JPN", "Japan", "JPY", "Japanese Yen", "¥"),
    country!("KE", "KEN", "Kenya", "KES", "Kenyan Shilling", "Sh"),
    country!("KG", "KGZ", "Kyrgyzstan", "KGS", "Kyrgyzstani Som", "с"),
    country!("KH", "KHM", "Cambodia", "KHR", "Cambodian Riel", "៛"),
    country!("KI", "KIR", "Kiribati", "AUD", "Australian Dollar", "$"),
    country!("KM", "COM", "Comoros", "KMF", "Comorian Franc", "Fr"),
    country!("KN", "KNA", "Saint Kitts and Nevis", "XCD", "East Caribbean Dollar", "$"),
    country!("KP", "PRK", "North Korea", "KPW", "North Korean Won", "₩"),
    country!("KR", "KOR", "South Korea", "KRW", "South Korean Won", "₩"),
    country!("KW", "KWT", "Kuwait", "KWD", "Kuwaiti Dinar", "د.ك"),
    country!("KY", "CYM", "Cayman Islands", "KYD", "Cayman Islands Dollar", "$"),
    country!("KZ", "KAZ", "Kazakhstan", "KZT", "Kazakhstani Tenge", "₸"),
    country!("LA", "LAO", "Laos", "LAK", "Lao Kip", "₭"),
    country!("LB", "LBN", "Lebanon", "LBP", "Lebanese Pound", "ل.ل"),
    country!("LC", "LCA", "Saint Lucia", "XCD", "East Caribbean Dollar", "$"),
    country!("LI", "LIE", "Liechtenstein", "CHF", "Swiss Franc", "Fr"),
    country!("LK", "LKA", "Sri Lanka", "LKR", "Sri Lankan Rupee", "Rs"),
    country!("LR", "LBR", "Liberia", "LRD", "Liberian Dollar", "$"),
    country!("LS", "LSO", "Lesotho", "LSL", "Lesotho Loti", "L"),
    country!("LT", "LTU", "Lithuania", "EUR", "Euro", "€"),
    country!("LU", "LUX", "Luxembourg", "EUR", "Euro", "€"),
    country!("LV", "LVA", "Latvia", "EUR", "Euro", "€"),
    country!("LY", "LBY", "Libya", "LYD", "Libyan Dinar", "ل.د"),
    country!("MA", "MAR", "Morocco", "MAD", "Moroccan Dirham", "د.م."),
    country!("MC", "MCO", "Monaco", "EUR", "Euro", "€"),
    country!("MD", "MDA", "Moldova", "MDL", "Moldovan Leu", "L"),
    country!("ME", "MNE", "Montenegro", "EUR", "Euro", "€"),
    country!("MG", "MDG", "Madagascar", "MGA", "Malagasy Ariary", "Ar"),
    country!("MH", "MHL", "Marshall Islands", "USD", "US Dollar", "$"),
    country!("MK", "MKD", "North Macedonia", "MKD", "Macedonian Denar", "ден"),
    country!("ML", "MLI", "Mali", "XOF", "West African CFA Franc", "Fr"),
    country!("MM", "MMR", "Myanmar", "MMK", "Myanmar Kyat", "K"),
    country!("MN", "MNG", "Mongolia", "MNT", "Mongolian Tögrög", "₮"),
    country!("MO", "MAC", "Macao", "MOP", "Macanese Pataca", "P"),
    country!("MP", "MNP", "Northern Mariana Islands", "USD", "US Dollar", "$"),
    country!("MR", "MRT", "Mauritania", "MRU", "Mauritanian Ouguiya", "UM"),
    country!("MS", "MSR", "Montserrat", "XCD", "East Caribbean Dollar", "$"),
    country!("MT", "MLT", "Malta", "EUR", "Euro", "€"),
    country!("MU", "MUS", "Mauritius", "MUR", "Mauritian Rupee", "₨"),
    country!("MV", "MDV", "Maldives", "MVR", "Maldivian Rufiyaa", ".ރ"),
    country!("MW", "MWI", "Malawi", "MWK", "Malawian Kwacha", "MK"),
    country!("MX", "MEX", "Mexico", "MXN", "Mexican Peso", "$"),
    country!("MY", "MYS", "Malaysia", "MYR", "Malaysian Ringgit", "RM"),
    country!("MZ", "MOZ", "Mozambique", "MZN", "Mozambican Metical", "MT"),
    country!("NA", "NAM", "Namibia", "NAD", "Namibian Dollar", "$"),
    country!("NE", "NER", "Niger", "XOF", "West African CFA Franc", "Fr"),
    country!("NG", "NGA", "Nigeria", "NGN", "Nigerian Naira", "₦"),
    country!("NI", "NIC", "Nicaragua", "NIO", "Nicaraguan Córdoba", "C$"),
    country!("NL", "NLD", "Netherlands", "EUR", "Euro", "€"),
    country!("NO", "NOR", "Norway", "NOK", "Norwegian Krone", "kr"),
    country!("NP", "NPL", "Nepal", "NPR", "Nepalese Rupee", "₨"),
    country!("NR", "NRU", "Nauru", "AUD", "Australian Dollar", "$"),
    country!("NZ", "NZL", "New Zealand", "NZD", "New Zealand Dollar", "$"),
    country!("OM", "OMN", "Oman", "OMR", "Omani Rial", "ر.ع."),
    country!("PA", "PAN", "Panama", "PAB", "Panamanian Balboa", "B/."),
    country!("PE", "PER", "Peru", "PEN", "Peruvian Sol", "S/"),
    country!("PG", "PNG", "Papua New Guinea", "PGK", "Papua New Guinean Kina", "K"),
    country!("PH", "PHL", "Philippines", "PHP", "Philippine Peso", "₱"),
    country!("PK", "PAK", "Pakistan", "PKR", "Pakistani Rupee", "₨"),
    country!("PL", "POL", "Poland", "PLN", "Polish Złoty", "zł"),
    country!("PR", "PRI", "Puerto Rico", "USD", "US Dollar", "$"),
    country!("PT", "PRT", "Portugal", "EUR", "Euro", "€"),
    country!("PW", "PLW", "Palau", "USD", "US Dollar", "$"),
    country!("PY", "PRY", "Paraguay", "PYG", "Paraguayan Guaraní", "₲"),
    country!("QA", "QAT", "Qatar", "QAR", "Qatari Riyal", "ر.ق"),
    country!("RO", "ROU", "Romania", "RON", "Romanian Leu", "lei"),
    country!("RS", "SRB", "Serbia", "RSD", "Serbian Dinar", "дин."),
    country!("RU", "RUS", "Russia", "RUB", "Russian Ruble", "₽"),
    country!("RW", "RWA", "Rwanda", "RWF", "Rwandan Franc", "Fr"),
    country!("SA", "SAU", "Saudi Arabia", "SAR", "Saudi Riyal", "ر.س"),
    country!("SB", "SLB", "Solomon Islands", "SBD", "Solomon Islands Dollar", "$"),
    country!("SC", "SYC", "Seychelles", "SCR", "Seychellois Rupee", "₨"),
    country!("SD", "SDN", "Sudan", "SDG", "Sudanese Pound", "ج.س."),
    country!("SE", "SWE", "Sweden", "SEK", "Swedish Krona", "kr"),
    country!("SG", "SGP", "Singapore", "SGD", "Singapore Dollar", "$"),
    country!("SI", "SVN", "Slovenia", "EUR", "Euro", "€"),
    country!("SK", "SVK", "Slovakia", "EUR", "Euro", "€"),
    country!("SL", "SLE", "Sierra Leone", "SLE", "Sierra Leonean Leone", "Le"),
    country!("SM", "SMR", "San Marino", "EUR", "Euro", "€"),
    country!("SN", "SEN", "Senegal", "XOF", "West African CFA Franc", "Fr"),
    country!("SO", "SOM", "Somalia", "SOS", "Somali Shilling", "Sh"),
    country!("SR", "SUR", "Suriname", "SRD", "Surinamese Dollar", "$"),
    country!("SS", "SSD", "South Sudan", "SSP", "South Sudanese Pound", "£"),
    country!("ST", "STP", "São Tomé and Príncipe", "STN", "São Tomé and Príncipe Dobra", "Db"),
    country!("SV", "SLV", "El Salvador", "USD", "US Dollar", "$"),
    country!("SX", "SXM", "Sint Maarten", "ANG", "Netherlands Antillean Guilder", "ƒ"),
    country!("SY", "SYR", "Syria", "SYP", "Syrian Pound", "£"),
    country!("SZ", "SWZ", "Eswatini", "SZL", "Swazi Lilangeni", "L"),
    country!("TC", "TCA", "Turks and Caicos Islands", "USD", "US Dollar", "$"),
    country!("TD", "TCD", "Chad", "XAF", "Central African CFA Franc", "Fr"),
    country!("TG", "TGO", "Togo", "XOF", "West African CFA Franc", "Fr"),
    country!("TH", "THA", "Thailand", "THB", "Thai Baht", "฿"),
    country!("TJ", "TJK", "Tajikistan", "TJS", "Tajikistani Somoni", "ЅМ"),
    country!("TL", "TLS", "Timor-Leste", "USD", "US Dollar", "$"),
    country!("TM", "TKM", "Turkmenistan", "TMT", "Turkmenistani Manat", "m"),
    country!("TN", "TUN", "Tunisia", "TND", "Tunisian Dinar", "د.ت"),
    country!("TO", "TON", "Tonga", "TOP", "Tongan Paʻanga", "T$"),
    country!("TR", "TUR", "Turkey", "TRY", "Turkish Lira", "₺"),
    country!("TT", "TTO", "Trinidad and Tobago", "TTD", "Trinidad and Tobago Dollar", "$"),
    country!("TV", "TUV", "Tuvalu", "AUD", "Australian Dollar", "$"),
    country!("TW", "TWN", "Taiwan", "TWD", "New Taiwan Dollar", "$"),
    country!("TZ", "TZA", "Tanzania", "TZS", "Tanzanian Shilling", "Sh"),
    country!("UA", "UKR", "Ukraine", "UAH", "Ukrainian Hryvnia", "₴"),
    country!("UG", "UGA", "Uganda", "UGX", "Ugandan Shilling", "Sh"),
    country!("US", "USA", "United States", "USD", "US Dollar", "$"),
    country!("UY", "URY", "Uruguay", "UYU", "Uruguayan Peso", "$"),
    country!("UZ", "UZB", "Uzbekistan", "UZS", "Uzbekistani Soʻm", "сўм"),
    country!("VC", "VCT", "Saint Vincent and the Grenadines", "XCD", "East Caribbean Dollar", "$"),
    country!("VE", "VEN", "Venezuela", "VES", "Venezuelan Bolívar", "Bs."),
    country!("VG", "VGB", "British Virgin Islands", "USD", "US Dollar", "$"),
    country!("VI", "VIR", "U.S. Virgin Islands", "USD", "US Dollar", "$"),
    country!("VN", "VNM", "Vietnam", "VND", "Vietnamese Đồng", "₫"),
    country!("VU", "VUT", "Vanuatu", "VUV", "Vanuatu Vatu", "Vt"),
    country!("WS", "WSM", "Samoa", "WST", "Samoan Tālā", "T"),
    country!("YE", "YEM", "Yemen", "YER", "Yemeni Rial", "﷼"),
    country!("ZA", "ZAF", "South Africa", "ZAR", "South African Rand", "R"),
    country!("ZM", "ZMB", "Zambia", "ZMW", "Zambian Kwacha", "ZK"),
    country!("ZW", "ZWE", "Zimbabwe", "ZWL", "Zimbabwean Dollar", "$"),
];

/// Calling-code prefix → ISO2.
///
/// One ISO2 per prefix. NANP members beyond the US are reachable through
/// their four-digit prefixes; the bare `"1"` is the US.
pub const CALLING_CODES: &[(&str, &str)] = &[
    ("1", "US"),
    ("1242", "BS"),
    ("1246", "BB"),
    ("1264", "AI"),
    ("1268", "AG"),
    ("1284", "VG"),
    ("1340", "VI"),
    ("1345", "KY"),
    ("1441", "BM"),
    ("1473", "GD"),
    ("1649", "TC"),
    ("1664", "MS"),
    ("1670", "MP"),
    ("1671", "GU"),
    ("1684", "AS"),
    ("1721", "SX"),
    ("1758", "LC"),
    ("1767", "DM"),
    ("1784", "VC"),
    ("1787", "PR"),
    ("1809", "DO"),
    ("1829", "DO"),
    ("1849", "DO"),
    ("1868", "TT"),
    ("1869", "KN"),
    ("1876", "JM"),
    ("1939", "PR"),
    ("20", "EG"),
    ("211", "SS"),
    ("212", "MA"),
    ("213", "DZ"),
    ("216", "TN"),
    ("218", "LY"),
    ("220", "GM"),
    ("221", "SN"),
    ("222", "MR"),
    ("223", "ML"),
    ("224", "GN"),
    ("225", "CI"),
    ("226", "BF"),
    ("227", "NE"),
    ("228", "TG"),
    ("229", "BJ"),
    ("230", "MU"),
    ("231", "LR"),
    ("232", "SL"),
    ("233", "GH"),
    ("234", "NG"),
    ("235", "TD"),
    ("236", "CF"),
    ("237", "CM"),
    ("238", "CV"),
    ("239", "ST"),
    ("240", "GQ"),
    ("241", "GA"),
    ("242", "CG"),
    ("243", "CD"),
    ("244", "AO"),
    ("245", "GW"),
    ("248", "SC"),
    ("249", "SD"),
    ("250", "RW"),
    ("251", "ET"),
    ("252", "SO"),
    ("253", "DJ"),
    ("254", "KE"),
    ("255", "TZ"),
    ("256", "UG"),
    ("257", "BI"),
    ("258", "MZ"),
    ("260", "ZM"),
    ("261", "MG"),
    ("263", "ZW"),
    ("264", "NA"),
    ("265", "MW"),
    ("266", "LS"),
    ("267", "BW"),
    ("268", "SZ"),
    ("269", "KM"),
    ("27", "ZA"),
    ("291", "ER"),
    ("297", "AW"),
    ("30", "GR"),
    ("31", "NL"),
    ("32", "BE"),
    ("33", "FR"),
    ("34", "ES"),
    ("350", "GI"),
    ("351", "PT"),
    ("352", "LU"),
    ("353", "IE"),
    ("354", "IS"),
    ("355", "AL"),
    ("356", "MT"),
    ("357", "CY"),
    ("358", "FI"),
    ("359", "BG"),
    ("36", "HU"),
    ("370", "LT"),
    ("371", "LV"),
    ("372", "EE"),
    ("373", "MD"),
    ("374", "AM"),
    ("375", "BY"),
    ("376", "AD"),
    ("377", "MC"),
    ("378", "SM"),
    ("380", "UA"),
    ("381", "RS"),
    ("382", "ME"),
    ("385", "HR"),
    ("386", "SI"),
    ("387", "BA"),
    ("389", "MK"),
    ("39", "IT"),
    ("40", "RO"),
    ("41", "CH"),
    ("420", "CZ"),
    ("421", "SK"),
    ("423", "LI"),
    ("43", "AT"),
    ("44", "GB"),
    ("45", "DK"),
    ("46", "SE"),
    ("47", "NO"),
    ("48", "PL"),
    ("49", "DE"),
    ("501", "BZ"),
    ("502", "GT"),
    ("503", "SV"),
    ("504", "HN"),
    ("505", "NI"),
    ("506", "CR"),
    ("507", "PA"),
    ("509", "HT"),
    ("51", "PE"),
    ("52", "MX"),
    ("53", "CU"),
    ("54", "AR"),
    ("55", "BR"),
    ("56", "CL"),
    ("57", "CO"),
    ("58", "VE"),
    ("591", "BO"),
    ("592", "GY"),
    ("593", "EC"),
    ("595", "PY"),
    ("597", "SR"),
    ("598", "UY"),
    ("599", "CW"),
    ("60", "MY"),
    ("61", "AU"),
    ("62", "ID"),
    ("63", "PH"),
    ("64", "NZ"),
    ("65", "SG"),
    ("66", "TH"),
    ("670", "TL"),
    ("673", "BN"),
    ("674", "NR"),
    ("675", "PG"),
    ("676", "TO"),
    ("677", "SB"),
    ("678", "VU"),
    ("679", "FJ"),
    ("680", "PW"),
    ("685", "WS"),
    ("686", "KI"),
    ("688", "TV"),
    ("691", "FM"),
    ("692", "MH"),
    ("7", "RU"),
    ("76", "KZ"),
    ("77", "KZ"),
    ("81", "JP"),
    ("82", "KR"),
    ("84", "VN"),
    ("850", "KP"),
    ("852", "HK"),
    ("853", "MO"),
    ("855", "KH"),
    ("856", "LA"),
    ("86", "CN"),
    ("880", "BD"),
    ("886", "TW"),
    ("90", "TR"),
    ("91", "IN"),
    ("92", "PK"),
    ("93", "AF"),
    ("94", "LK"),
    ("95", "MM"),
    ("960", "MV"),
    ("961", "LB"),
    ("962", "JO"),
    ("963", "SY"),
    ("964", "IQ"),
    ("965", "KW"),
    ("966", "SA"),
    ("967", "YE"),
    ("968", "OM"),
    ("971", "AE"),
    ("972", "IL"),
    ("973", "BH"),
    ("974", "QA"),
    ("975", "BT"),
    ("976", "MN"),
    ("977", "NP"),
    ("98", "IR"),
    ("992", "TJ"),
    ("993", "TM"),
    ("994", "AZ"),
    ("995", "GE"),
    ("996", "KG"),
    ("998", "UZ"),
];
