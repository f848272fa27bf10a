use serde::{Deserialize, Serialize};

/// Lifecycle state of a purchase.
///
/// `active` is the only initial state observed by this layer; `completed`
/// and `canceled` are terminal here. Transitions happen exclusively in the
/// remote payment collaborator, never locally. Wire values outside the
/// closed set degrade to `Unknown` instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseStatus {
    Active,
    Completed,
    Canceled,
    #[serde(other)]
    Unknown,
}

impl PurchaseStatus {
    /// Parses a wire value; anything outside the closed set maps to `Unknown`.
    pub fn parse(value: &str) -> Self {
        match value {
            "active" => PurchaseStatus::Active,
            "completed" => PurchaseStatus::Completed,
            "canceled" => PurchaseStatus::Canceled,
            _ => PurchaseStatus::Unknown,
        }
    }

    /// The payment trigger is only offered while the purchase is still open.
    pub fn is_payable(&self) -> bool {
        matches!(self, PurchaseStatus::Active)
    }

    /// Display label and color token for this status.
    pub fn view(&self) -> StatusView {
        match self {
            PurchaseStatus::Active => StatusView {
                label: "Pendente",
                color: ColorToken::Warning,
            },
            PurchaseStatus::Completed => StatusView {
                label: "Concluída",
                color: ColorToken::Success,
            },
            PurchaseStatus::Canceled => StatusView {
                label: "Cancelada",
                color: ColorToken::Danger,
            },
            PurchaseStatus::Unknown => StatusView {
                label: "Desconhecido",
                color: ColorToken::Neutral,
            },
        }
    }
}

/// Derived label/color pair for a purchase's lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusView {
    pub label: &'static str,
    pub color: ColorToken,
}

/// Semantic color slot; the presentation layer maps it to a concrete theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorToken {
    Warning,
    Success,
    Danger,
    Neutral,
}

/// History filter keys offered to the user. Each non-`All` key matches
/// exactly one underlying status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Pending,
    Completed,
    Canceled,
}

impl StatusFilter {
    pub fn matches(&self, status: PurchaseStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => status == PurchaseStatus::Active,
            StatusFilter::Completed => status == PurchaseStatus::Completed,
            StatusFilter::Canceled => status == PurchaseStatus::Canceled,
        }
    }
}
