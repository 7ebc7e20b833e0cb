use std::fmt;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum UnitClass {
    Militia,
    Spearmen,
    LightCavalry,
    HeavyCavalry,
    FootArcher,
    CavalryArcher,
}

impl UnitClass {
    pub const ALL: [UnitClass; 6] = [
        UnitClass::Militia,
        UnitClass::Spearmen,
        UnitClass::LightCavalry,
        UnitClass::HeavyCavalry,
        UnitClass::FootArcher,
        UnitClass::CavalryArcher,
    ];

    pub fn name(self) -> &'static str {
        match self {
            UnitClass::Militia => "Militia",
            UnitClass::Spearmen => "Spearmen",
            UnitClass::LightCavalry => "LightCavalry",
            UnitClass::HeavyCavalry => "HeavyCavalry",
            UnitClass::FootArcher => "FootArcher",
            UnitClass::CavalryArcher => "CavalryArcher",
        }
    }

    /// Exact, case-sensitive lookup of a class by its token name.
    pub fn from_name(name: &str) -> Option<UnitClass> {
        CLASS_NAMES.get(name).copied()
    }

    /// Classes this one doubles its strength against.
    pub fn advantages(self) -> &'static [UnitClass] {
        ADVANTAGE[self as usize]
    }
}

impl fmt::Display for UnitClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

static CLASS_NAMES: phf::Map<&'static str, UnitClass> = phf::phf_map! {
    "Militia" => UnitClass::Militia,
    "Spearmen" => UnitClass::Spearmen,
    "LightCavalry" => UnitClass::LightCavalry,
    "HeavyCavalry" => UnitClass::HeavyCavalry,
    "FootArcher" => UnitClass::FootArcher,
    "CavalryArcher" => UnitClass::CavalryArcher,
};

// Indexed by `UnitClass as usize`; order must follow the enum declaration.
const ADVANTAGE: [&[UnitClass]; 6] = [
    // Militia
    &[UnitClass::Spearmen, UnitClass::LightCavalry],
    // Spearmen
    &[UnitClass::LightCavalry, UnitClass::HeavyCavalry],
    // LightCavalry
    &[UnitClass::FootArcher, UnitClass::CavalryArcher],
    // HeavyCavalry
    &[
        UnitClass::Militia,
        UnitClass::FootArcher,
        UnitClass::LightCavalry,
    ],
    // FootArcher
    &[UnitClass::Militia, UnitClass::CavalryArcher],
    // CavalryArcher
    &[UnitClass::Spearmen, UnitClass::HeavyCavalry],
];

pub fn beats(attacker: UnitClass, defender: UnitClass) -> bool {
    attacker.advantages().contains(&defender)
}
