use serde::{Deserialize, Serialize};

/// Card-issuing networks supported by the bank. Wire code matches the
/// original numeric DTO contract (MAESTRO = 1, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardType {
    Maestro,
    Visa,
    MasterCard,
    Mir,
}

impl CardType {
    pub const ALL: [CardType; 4] = [
        CardType::Maestro,
        CardType::Visa,
        CardType::MasterCard,
        CardType::Mir,
    ];

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(CardType::Maestro),
            2 => Some(CardType::Visa),
            3 => Some(CardType::MasterCard),
            4 => Some(CardType::Mir),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            CardType::Maestro => 1,
            CardType::Visa => 2,
            CardType::MasterCard => 3,
            CardType::Mir => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CardType::Maestro => "MAESTRO",
            CardType::Visa => "VISA",
            CardType::MasterCard => "MASTERCARD",
            CardType::Mir => "MIR",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "MAESTRO" => Some(CardType::Maestro),
            "VISA" => Some(CardType::Visa),
            "MASTERCARD" => Some(CardType::MasterCard),
            "MIR" => Some(CardType::Mir),
            _ => None,
        }
    }

    /// Issuing BIN the bank emits card numbers under, one per network.
    pub fn bin(self) -> &'static str {
        match self {
            CardType::Maestro => "6762",
            CardType::Visa => "4083",
            CardType::MasterCard => "5101",
            CardType::Mir => "2204",
        }
    }
}

/// Currencies a card can be denominated in (RUR = 0, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    Rur,
    Usd,
    Eur,
}

impl Currency {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Currency::Rur),
            1 => Some(Currency::Usd),
            2 => Some(Currency::Eur),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            Currency::Rur => 0,
            Currency::Usd => 1,
            Currency::Eur => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Currency::Rur => "RUR",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "RUR" => Some(Currency::Rur),
            "USD" => Some(Currency::Usd),
            "EUR" => Some(Currency::Eur),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_type_codes_round_trip() {
        for ty in CardType::ALL {
            assert_eq!(CardType::from_code(ty.code()), Some(ty));
            assert_eq!(CardType::from_name(ty.as_str()), Some(ty));
        }
        assert_eq!(CardType::from_code(0), None);
        assert_eq!(CardType::from_code(5), None);
    }

    #[test]
    fn currency_codes_round_trip() {
        for cur in [Currency::Rur, Currency::Usd, Currency::Eur] {
            assert_eq!(Currency::from_code(cur.code()), Some(cur));
            assert_eq!(Currency::from_name(cur.as_str()), Some(cur));
        }
        assert_eq!(Currency::from_code(4), None);
    }
}
