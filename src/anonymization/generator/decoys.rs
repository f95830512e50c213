//! Static decoy pools
//!
//! Read-only source material for the fictitious value generator. The pools
//! are configuration handed to the engine at construction, never global
//! mutable state; per-call bookkeeping (which names have been issued) lives
//! in the generator itself.

/// Decoy full names spanning the conventions of real judicial text:
/// uppercase, lowercase, title case, natural and comma-judicial order,
/// two- and three-word forms.
const PERSON_NAMES: &[&str] = &[
    // Natural order, uppercase
    "JUAN PÉREZ GARCÍA",
    "MARÍA GONZÁLEZ LÓPEZ",
    "CARLOS RODRÍGUEZ MARTÍN",
    "ANA FERNÁNDEZ SILVA",
    "LUIS MARTÍN RUIZ",
    "CARMEN SÁNCHEZ TORRES",
    "JOSÉ LÓPEZ HERNÁNDEZ",
    "PILAR GARCÍA MORENO",
    "ANTONIO RUIZ JIMÉNEZ",
    "TERESA MARTÍN ALONSO",
    "FRANCISCO TORRES RAMOS",
    "ISABEL HERNÁNDEZ VEGA",
    "PEDRO MORALES DÍAZ",
    "LAURA JIMÉNEZ CASTRO",
    "MIGUEL VARGAS LUNA",
    "SOFÍA MENDOZA RUIZ",
    "DIEGO HERRERA VEGA",
    "CAMILA ORTIZ PEÑA",
    "ALEJANDRO VEGA CASTRO",
    "CRISTINA MORA BLANCO",
    "EDUARDO LEÓN SANTOS",
    "PATRICIA RAMOS PRIETO",
    "RICARDO HERRERA CAMPOS",
    "BEATRIZ NAVARRO CRUZ",
    // Comma-judicial order, uppercase
    "PÉREZ GARCÍA, JUAN",
    "GONZÁLEZ LÓPEZ, MARÍA",
    "RODRÍGUEZ MARTÍN, CARLOS",
    "FERNÁNDEZ SILVA, ANA",
    "MARTÍN RUIZ, LUIS",
    "SÁNCHEZ TORRES, CARMEN",
    "LÓPEZ HERNÁNDEZ, JOSÉ",
    "GARCÍA MORENO, PILAR",
    "RUIZ JIMÉNEZ, ANTONIO",
    "MARTÍN ALONSO, TERESA",
    "TORRES RAMOS, FRANCISCO",
    "HERNÁNDEZ VEGA, ISABEL",
    "VEGA CASTRO, ALEJANDRO",
    "MORA BLANCO, CRISTINA",
    "LEÓN SANTOS, EDUARDO",
    // Natural order, lowercase
    "juan pérez garcía",
    "maría gonzález lópez",
    "carlos rodríguez martín",
    "ana fernández silva",
    "luis martín ruiz",
    "carmen sánchez torres",
    "josé lópez hernández",
    "pilar garcía moreno",
    "antonio ruiz jiménez",
    "teresa martín alonso",
    "francisco torres ramos",
    "isabel hernández vega",
    "alejandro vega castro",
    "cristina mora blanco",
    "eduardo león santos",
    // Comma-judicial order, lowercase
    "pérez garcía, juan",
    "gonzález lópez, maría",
    "rodríguez martín, carlos",
    "fernández silva, ana",
    "martín ruiz, luis",
    "sánchez torres, carmen",
    "lópez hernández, josé",
    "garcía moreno, pilar",
    "ruiz jiménez, antonio",
    "vega castro, alejandro",
    "mora blanco, cristina",
    "león santos, eduardo",
    // Two-word forms, uppercase
    "JUAN CASTAÑO",
    "MARÍA QUINTERO",
    "CARLOS ZAPATA",
    "ANA BETANCUR",
    "LUIS OSPINA",
    "CARMEN GIRALDO",
    "JOSÉ CARDONA",
    "PILAR RESTREPO",
    "ANTONIO ARANGO",
    "TERESA VELÁSQUEZ",
    "FRANCISCO MONTOYA",
    "ISABEL OCAMPO",
    "PEDRO BEDOYA",
    "LAURA ECHEVERRI",
    "MIGUEL GAVIRIA",
    "SOFÍA URIBE",
    // Two-word forms, lowercase
    "juan castaño",
    "maría quintero",
    "carlos zapata",
    "ana betancur",
    "luis ospina",
    "carmen giraldo",
    "josé cardona",
    "pilar restrepo",
    "antonio arango",
    "teresa velásquez",
    "francisco montoya",
    "isabel ocampo",
    // Title case
    "Juan Pérez García",
    "María González López",
    "Carlos Rodríguez Martín",
    "Ana Fernández Silva",
    "Luis Martín Ruiz",
    "Carmen Sánchez Torres",
    "José López Hernández",
    "Pilar García Moreno",
    "Antonio Ruiz Jiménez",
    "Teresa Martín Alonso",
    "Francisco Torres Ramos",
    "Isabel Hernández Vega",
    "Alejandro Vega Castro",
    "Cristina Mora Blanco",
    "Eduardo León Santos",
    "Patricia Ramos Prieto",
    // Comma-judicial order, title case
    "Pérez García, Juan",
    "González López, María",
    "Rodríguez Martín, Carlos",
    "Fernández Silva, Ana",
    "Vega Castro, Alejandro",
    "Mora Blanco, Cristina",
];

/// Decoy institution names. Deliberately fictitious jurisdictions.
const INSTITUTIONS: &[&str] = &[
    "JUZGADO PRIMERO PENAL DEL CIRCUITO DE CIUDAD EJEMPLO",
    "JUZGADO SEGUNDO PENAL MUNICIPAL DE DISTRITO DEMO",
    "JUZGADO TERCERO CIVIL DEL CIRCUITO DE VILLA MODELO",
    "TRIBUNAL SUPERIOR DE JURISDICCIÓN MODELO",
    "TRIBUNAL CONTENCIOSO DE TERRITORIO PILOTO",
    "FISCALÍA SECCIONAL DE TERRITORIO MUESTRA",
    "FISCALÍA LOCAL DE COMARCA FICTICIA",
    "JUZGADO PROMISCUO MUNICIPAL DE PUEBLO PATRÓN",
];

/// Real Colombian mobile prefixes, so regenerated numbers keep a plausible shape.
const MOBILE_PREFIXES: &[&str] = &[
    "300", "301", "302", "310", "311", "312", "313", "314", "315", "316", "317", "318",
    "319", "320", "321", "322", "323", "324", "350", "351",
];

/// Decoy email domains
const EMAIL_DOMAINS: &[&str] = &[
    "ejemplo.com",
    "demo.org",
    "muestra.net",
    "ficticio.co",
    "prueba.edu",
];

/// Street types for regenerated addresses
const STREET_TYPES: &[&str] = &["Calle", "Carrera", "Avenida", "Diagonal", "Transversal"];

/// Read-only decoy pools handed to the engine at construction.
#[derive(Debug, Clone)]
pub struct DecoyPools {
    pub person_names: Vec<String>,
    pub institutions: Vec<String>,
    pub mobile_prefixes: Vec<String>,
    pub email_domains: Vec<String>,
    pub street_types: Vec<String>,
}

impl Default for DecoyPools {
    fn default() -> Self {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
        Self {
            person_names: owned(PERSON_NAMES),
            institutions: owned(INSTITUTIONS),
            mobile_prefixes: owned(MOBILE_PREFIXES),
            email_domains: owned(EMAIL_DOMAINS),
            street_types: owned(STREET_TYPES),
        }
    }
}
