use crate::types::UnitClass;
use anyhow::{anyhow, bail};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A homogeneous body of soldiers of one class.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Platoon {
    pub class: UnitClass,
    pub count: u64,
}

impl Platoon {
    pub fn new(class: UnitClass, count: u64) -> Self {
        assert!(count > 0, "platoon of {class} must have a positive count");
        Platoon { class, count }
    }
}

impl fmt::Display for Platoon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.class, self.count)
    }
}

// Token grammar: `Class#Digits`, no surrounding whitespace.
impl FromStr for Platoon {
    type Err = anyhow::Error;

    fn from_str(token: &str) -> anyhow::Result<Self> {
        let invalid = || anyhow!("invalid token format `{token}` (must be Class#Number)");
        let (name, digits) = token.split_once('#').ok_or_else(invalid)?;
        let class = UnitClass::from_name(name).ok_or_else(invalid)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        // all-digit input can only fail to parse by overflowing
        let count: u64 = digits
            .parse()
            .map_err(|_| anyhow!("soldier count too large (`{token}`)"))?;
        if count == 0 {
            bail!("soldier count must be > 0 (`{token}`)");
        }
        Ok(Platoon { class, count })
    }
}

impl TryFrom<String> for Platoon {
    type Error = anyhow::Error;

    fn try_from(token: String) -> anyhow::Result<Self> {
        token.parse()
    }
}

impl From<Platoon> for String {
    fn from(platoon: Platoon) -> String {
        platoon.to_string()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BattleSpec {
    pub ours: Vec<String>,
    pub theirs: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct BattlesFile {
    pub battles: Vec<BattleSpec>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BattleOutcome {
    pub index: usize,
    pub wins: usize,
    pub plan: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_displays_token() {
        let p: Platoon = "LightCavalry#1000".parse().expect("valid token");
        assert_eq!(p, Platoon::new(UnitClass::LightCavalry, 1000));
        assert_eq!(p.to_string(), "LightCavalry#1000");
    }

    #[test]
    fn rejects_malformed_tokens() {
        for bad in [
            "Knight#10",
            "Militia10",
            "Militia#",
            "Militia#-3",
            "Militia#+3",
            "Militia#1.5",
            " Militia#3",
            "Militia#3#4",
        ] {
            let err = bad.parse::<Platoon>().expect_err(bad);
            assert!(
                err.to_string().starts_with("invalid token format"),
                "{bad}: {err}"
            );
        }
    }

    #[test]
    fn accepts_counts_beyond_u32() {
        let p: Platoon = "Militia#5000000000".parse().expect("fits in u64");
        assert_eq!(p.count, 5_000_000_000);
        assert_eq!(p.to_string(), "Militia#5000000000");
    }

    #[test]
    fn reports_oversized_count_separately() {
        let err = "Militia#99999999999999999999999"
            .parse::<Platoon>()
            .expect_err("overflows u64");
        assert_eq!(
            err.to_string(),
            "soldier count too large (`Militia#99999999999999999999999`)"
        );
    }

    #[test]
    fn rejects_zero_count() {
        let err = "Spearmen#0".parse::<Platoon>().expect_err("zero count");
        assert_eq!(err.to_string(), "soldier count must be > 0 (`Spearmen#0`)");
    }

    #[test]
    fn serde_uses_token_string() {
        let p = Platoon::new(UnitClass::FootArcher, 20);
        let json = serde_json::to_string(&p).expect("serialize");
        assert_eq!(json, "\"FootArcher#20\"");
        let back: Platoon = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, p);
        assert!(serde_json::from_str::<Platoon>("\"FootArcher#0\"").is_err());
    }

    #[test]
    #[should_panic(expected = "positive count")]
    fn constructor_rejects_zero() {
        let _ = Platoon::new(UnitClass::Militia, 0);
    }
}
