//! Booking wizard steps

use serde::{Deserialize, Serialize};

/// The five linear wizard steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Plan,
    Date,
    Time,
    Customer,
    Confirm,
}

impl Step {
    pub const ALL: [Step; 5] = [
        Step::Plan,
        Step::Date,
        Step::Time,
        Step::Customer,
        Step::Confirm,
    ];

    /// 1-based position
    pub fn number(self) -> u8 {
        match self {
            Self::Plan => 1,
            Self::Date => 2,
            Self::Time => 3,
            Self::Customer => 4,
            Self::Confirm => 5,
        }
    }

    pub fn next(self) -> Option<Step> {
        match self {
            Self::Plan => Some(Self::Date),
            Self::Date => Some(Self::Time),
            Self::Time => Some(Self::Customer),
            Self::Customer => Some(Self::Confirm),
            Self::Confirm => None,
        }
    }

    pub fn prev(self) -> Option<Step> {
        match self {
            Self::Plan => None,
            Self::Date => Some(Self::Plan),
            Self::Time => Some(Self::Date),
            Self::Customer => Some(Self::Time),
            Self::Confirm => Some(Self::Customer),
        }
    }

    pub fn is_last(self) -> bool {
        self == Self::Confirm
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Plan => "Plan",
            Self::Date => "Fecha",
            Self::Time => "Hora",
            Self::Customer => "Tus datos",
            Self::Confirm => "Confirmar",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Plan => "Elige tu plan",
            Self::Date => "Selecciona el día",
            Self::Time => "Elige el horario",
            Self::Customer => "Información personal",
            Self::Confirm => "Revisa y confirma",
        }
    }

    /// Progress bar fill: 0 on the first step, 100 on the last
    pub fn progress_percent(self) -> u8 {
        let total = Step::ALL.len() as u16 - 1;
        let done = u16::from(self.number() - 1);
        (done * 100 / total) as u8
    }
}
