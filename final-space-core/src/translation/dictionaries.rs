//! Static translation tables (English → Spanish)
//!
//! Keys are the exact strings the upstream catalog emits. Several keys are
//! spelling or spacing variants of the same value (including upstream typos);
//! each variant is kept as its own exact-match key.

use std::collections::HashMap;
use std::sync::LazyLock;

/// An exact-match lookup table.
#[derive(Debug)]
pub struct Dictionary {
    entries: HashMap<&'static str, &'static str>,
}

impl Dictionary {
    fn from_entries(entries: &[(&'static str, &'static str)]) -> Self {
        Self {
            entries: entries.iter().copied().collect(),
        }
    }

    /// Exact-match lookup.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.entries.get(key).copied()
    }

    /// Exact-match lookup that falls back to `value` itself.
    pub fn lookup<'a>(&self, value: &'a str) -> &'a str {
        self.get(value).unwrap_or(value)
    }
}

pub(crate) const STATUS_ENTRIES: &[(&str, &str)] = &[
    ("Alive", "Vivo"),
    ("Dead", "Muerto"),
    ("Unknown", "Desconocido"),
    ("Deceased", "Fallecido"),
    ("Operational", "Operacional"),
    ("Destroyed", "Destruido"),
    ("Imprisoned", "Aprisionado"),
];

pub(crate) const GENDER_ENTRIES: &[(&str, &str)] = &[
    ("Male", "Masculino"),
    ("Female", "Femenino"),
    ("Unknown", "Desconocido"),
    ("None", "Ninguno"),
    ("None (referred to as male)", "Ninguno (referido como masculino)"),
    ("None (referred to as Male)", "Ninguno (referido como masculino)"),
    ("None(referred to as Male)", "Ninguno (referido como masculino)"),
    ("Genderfluid", "Género fluido"),
    ("Genderless", "Sin género"),
];

pub(crate) const SPECIES_ENTRIES: &[(&str, &str)] = &[
    ("Human", "Humano"),
    ("Robot", "Robot"),
    ("Ventrexian", "Ventrexiano"),
    ("Tryvuulian", "Tryvuuliano"),
    ("Serepentian", "Serepentiano"),
    ("Artificial Intelligence", "Inteligencia Artificial"),
    ("Titan", "Titán"),
    ("Cosmic Entity", "Entidad Cósmica"),
    ("Energy being", "Ser de energía"),
    ("Fire Snake", "Serpiente de fuego"),
    ("Cyborg", "Ciborg"),
    ("Alien", "Alienígena"),
    ("Hooblot", "Hooblot"),
    ("Tiger Tiger", "Tigre Tigre"),
    ("Mooncake's Species", "Especie de Mooncake"),
    ("Unknown", "Desconocido"),
];

pub(crate) const ABILITY_ENTRIES: &[(&str, &str)] = &[
    ("Piloting", "Pilotaje"),
    ("Marksmanship", "Puntería"),
    ("Hand-to-hand combat", "Combate cuerpo a cuerpo"),
    ("Weapons: Blasters", "Armas: Blasters"),
    ("Weapons: Black hole gun (briefly)", "Armas: Pistola de agujero negro (brevemente)"),
    ("Weapons: Robot arm", "Armas: Brazo robótico"),
    ("Weapons: Laser gun", "Armas: Pistola láser"),
    ("Weapons: Laser sword", "Armas: Espada láser"),
    ("Hovering", "Levitación"),
    ("Firing Laser Beams", "Disparo de rayos láser"),
    ("Planetary Destruction", "Destrucción planetaria"),
    ("Astrophysicist", "Astrofísico/a"),
    ("Engineer", "Ingeniero/a"),
    ("Electronics", "Electrónica"),
    ("Acrobatics", "Acrobacias"),
    ("Combat skills", "Habilidades de combate"),
    ("Surgery", "Cirugía"),
    ("Combat prowess", "Destreza en combate"),
    ("Solving riddles", "Resolver acertijos"),
    ("Nigh-Invulnerability", "Casi invulnerable"),
    ("Dark Energy Manipulation", "Manipulación de energía oscura"),
    ("Telekinesis", "Telequinesis"),
    ("Flight", "Vuelo"),
    ("Pyrokinesis", "Pirokinesis"),
    ("MiniGun attached to Right Arm.", "Miniametralladora adjunta al brazo derecho"),
    ("Musical talents", "Talentos musicales"),
    ("Strength", "Fuerza"),
    ("Controls on the Galaxy One", "Controles de la Galaxy One"),
    ("Stretchable Limbs(Season 2)", "Extremidades extensibles (Temporada 2)"),
    ("Competent Leader", "Líder competente"),
    ("Combatant", "Combatiente"),
    ("Capable Shrink", "Encogimiento capaz"),
    (
        "Multiple Forms - a snake-rat hybrid and a large, wasp-like alien",
        "Múltiples formas - un híbrido de serpiente-rata y un alienígena grande parecido a una avispa",
    ),
    ("Quick Heal", "Curación rápida"),
    ("Regenerate", "Regeneración"),
    ("Technical expertise", "Experiencia técnica"),
    ("Powerful roar", "Rugido poderoso"),
    ("Weapons: Fire axe", "Armas: Hacha de fuego"),
    ("Weapons: Speart", "Armas: Lanza"),
    ("Light(Telekinesis)", "Luz (Telequinesis)"),
    ("Energy Projection", "Proyección de energía"),
    ("Size-shifting", "Cambio de tamaño"),
    ("Shapeshifting", "Cambio de forma"),
    ("Superhuman strength", "Fuerza sobrehumana"),
    ("Cosmic Being", "Ser cósmico"),
    ("Telepathy", "Telepatía"),
    ("Weapons: Titanslayer", "Armas: Mata-titanes"),
    ("Superhuman Stength", "Fuerza sobrehumana"),
    ("Levitation", "Levitación"),
    ("Swordsmanship", "Esgrima"),
    ("Size Manipulation", "Manipulación de tamaño"),
    ("Resistance to Mind Manipulation", "Resistencia a manipulación mental"),
    ("Possession", "Posesión"),
    ("Corruption", "Corrupción"),
    ("Immortality", "Inmortalidad"),
    ("Manipulation", "Manipulación"),
    ("Time Travel", "Viaje en el tiempo"),
    ("Fighting", "Lucha"),
    ("Leadership", "Liderazgo"),
    ("Weapons: Staff", "Armas: Bastón"),
    ("Tribore's Second in Command", "Segundo al mando de Tribore"),
    ("Saw hands", "Manos sierra"),
    ("Mind-breaking", "Destrucción mental"),
];

/// Character status (7 entries).
pub static STATUS: LazyLock<Dictionary> =
    LazyLock::new(|| Dictionary::from_entries(STATUS_ENTRIES));

/// Character gender (9 entries).
pub static GENDER: LazyLock<Dictionary> =
    LazyLock::new(|| Dictionary::from_entries(GENDER_ENTRIES));

/// Character species (16 entries).
pub static SPECIES: LazyLock<Dictionary> =
    LazyLock::new(|| Dictionary::from_entries(SPECIES_ENTRIES));

/// Ability names (63 entries).
pub static ABILITY: LazyLock<Dictionary> =
    LazyLock::new(|| Dictionary::from_entries(ABILITY_ENTRIES));
