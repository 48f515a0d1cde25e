//! The catalogue of available calculators.

use serde::{Deserialize, Serialize};

/// Identifies one of the seven benefit calculators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculatorKind {
    /// Permanent partial incapacity (IPP).
    PartialPermanent,
    /// Absolute permanent incapacity for any work.
    AbsolutePermanentTotal,
    /// Absolute permanent incapacity for habitual work.
    AbsolutePermanentHabitual,
    /// Temporary incapacity over multiple periods.
    TemporaryIncapacity,
    /// High-incapacity subsidy.
    HighIncapacitySubsidy,
    /// Annual pension revaluation.
    PensionRevaluation,
    /// Fatal accident survivor pensions and subsidies.
    FatalAccident,
}

impl CalculatorKind {
    /// All calculators, in menu order.
    pub const ALL: [CalculatorKind; 7] = [
        CalculatorKind::PartialPermanent,
        CalculatorKind::AbsolutePermanentTotal,
        CalculatorKind::AbsolutePermanentHabitual,
        CalculatorKind::TemporaryIncapacity,
        CalculatorKind::HighIncapacitySubsidy,
        CalculatorKind::PensionRevaluation,
        CalculatorKind::FatalAccident,
    ];

    /// URL-friendly identifier, used as the route segment.
    pub fn id(self) -> &'static str {
        match self {
            CalculatorKind::PartialPermanent => "partial-permanent",
            CalculatorKind::AbsolutePermanentTotal => "absolute-permanent-total",
            CalculatorKind::AbsolutePermanentHabitual => "absolute-permanent-habitual",
            CalculatorKind::TemporaryIncapacity => "temporary-incapacity",
            CalculatorKind::HighIncapacitySubsidy => "high-incapacity-subsidy",
            CalculatorKind::PensionRevaluation => "pension-revaluation",
            CalculatorKind::FatalAccident => "fatal-accident",
        }
    }

    /// Portuguese title.
    pub fn title(self) -> &'static str {
        match self {
            CalculatorKind::PartialPermanent => "Incapacidade Permanente Parcial",
            CalculatorKind::AbsolutePermanentTotal => "IPP Absoluta (Qualquer Trabalho)",
            CalculatorKind::AbsolutePermanentHabitual => "IPP Absoluta (Trabalho Habitual)",
            CalculatorKind::TemporaryIncapacity => "Incapacidade Temporária",
            CalculatorKind::HighIncapacitySubsidy => "Subsídio de Elevada Incapacidade",
            CalculatorKind::PensionRevaluation => "Atualização de Pensões",
            CalculatorKind::FatalAccident => "Acidente Mortal",
        }
    }

    /// One-line Portuguese description.
    pub fn description(self) -> &'static str {
        match self {
            CalculatorKind::PartialPermanent => {
                "Cálculo de pensão anual, capital de remição e retroativos."
            }
            CalculatorKind::AbsolutePermanentTotal => {
                "Cálculo para incapacidade absoluta para todo e qualquer trabalho."
            }
            CalculatorKind::AbsolutePermanentHabitual => {
                "Cálculo para incapacidade absoluta para o trabalho habitual do sinistrado."
            }
            CalculatorKind::TemporaryIncapacity => {
                "Indemnizações por múltiplos períodos de ITA ou ITP."
            }
            CalculatorKind::HighIncapacitySubsidy => {
                "Subsídio por situações de elevada incapacidade permanente."
            }
            CalculatorKind::PensionRevaluation => {
                "Aplicação cronológica de coeficientes de atualização desde 1999."
            }
            CalculatorKind::FatalAccident => {
                "Cálculo de pensões de sobrevivência, subsídios e despesas de funeral."
            }
        }
    }
}
