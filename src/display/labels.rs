//! Locale label table
//!
//! Reports are computed on language-neutral fields; only rendering looks up
//! display text here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FinboardError;
use crate::models::Money;

/// Supported display locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Locale {
    #[default]
    En,
    PtBr,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::En => write!(f, "en"),
            Self::PtBr => write!(f, "pt-br"),
        }
    }
}

impl FromStr for Locale {
    type Err = FinboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "en" | "en-us" => Ok(Self::En),
            "pt" | "pt-br" => Ok(Self::PtBr),
            other => Err(FinboardError::Validation(format!(
                "Unsupported locale: {}. Use en or pt-br",
                other
            ))),
        }
    }
}

/// Keys for every piece of report text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    CashFlowTitle,
    SupplierTitle,
    StatusTitle,
    TopClientsTitle,
    MonthTitle,
    ForecastTitle,
    DashboardTitle,
    Revenue,
    Expense,
    Kind,
    Supplier,
    Client,
    Status,
    Total,
    Pending,
    Settled,
    Unknown,
    Payables,
    Receivables,
    PayablesDue,
    ReceivablesDue,
    Net,
    Window,
    NoData,
    SkippedRows,
    ExcludedSuppliers,
    OrphanedReceivables,
    Clients,
    Ledger,
    Id,
    Name,
    Email,
    Phone,
    Amount,
    DueDate,
    Date,
    Description,
}

impl Locale {
    /// Look up the display text for a label
    pub fn text(self, label: Label) -> &'static str {
        match self {
            Self::En => english(label),
            Self::PtBr => portuguese(label),
        }
    }
}

fn english(label: Label) -> &'static str {
    match label {
        Label::CashFlowTitle => "Cash Flow Summary",
        Label::SupplierTitle => "Payables by Supplier",
        Label::StatusTitle => "Payable and Receivable Status",
        Label::TopClientsTitle => "Top Clients by Revenue",
        Label::MonthTitle => "Revenue vs Expense - Current Month",
        Label::ForecastTitle => "Cash Flow Forecast",
        Label::DashboardTitle => "Financial Dashboard",
        Label::Revenue => "Revenue",
        Label::Expense => "Expense",
        Label::Kind => "Kind",
        Label::Supplier => "Supplier",
        Label::Client => "Client",
        Label::Status => "Status",
        Label::Total => "Total",
        Label::Pending => "Pending",
        Label::Settled => "Paid/Received",
        Label::Unknown => "Unknown",
        Label::Payables => "Payables",
        Label::Receivables => "Receivables",
        Label::PayablesDue => "Payables Due",
        Label::ReceivablesDue => "Receivables Due",
        Label::Net => "Net",
        Label::Window => "Window",
        Label::NoData => "No data available.",
        Label::SkippedRows => "Skipped rows",
        Label::ExcludedSuppliers => "Suppliers not shown",
        Label::OrphanedReceivables => "Receivables without client",
        Label::Clients => "Clients",
        Label::Ledger => "Ledger Entries",
        Label::Id => "Id",
        Label::Name => "Name",
        Label::Email => "Email",
        Label::Phone => "Phone",
        Label::Amount => "Amount",
        Label::DueDate => "Due Date",
        Label::Date => "Date",
        Label::Description => "Description",
    }
}

fn portuguese(label: Label) -> &'static str {
    match label {
        Label::CashFlowTitle => "Relatório de Fluxo de Caixa",
        Label::SupplierTitle => "Contas a Pagar por Fornecedor",
        Label::StatusTitle => "Status das Contas a Pagar e Receber",
        Label::TopClientsTitle => "Clientes com Maior Receita",
        Label::MonthTitle => "Receita vs Despesa - Mês Atual",
        Label::ForecastTitle => "Previsão de Fluxo de Caixa",
        Label::DashboardTitle => "Painel Financeiro",
        Label::Revenue => "Receita",
        Label::Expense => "Despesa",
        Label::Kind => "Tipo",
        Label::Supplier => "Fornecedor",
        Label::Client => "Cliente",
        Label::Status => "Status",
        Label::Total => "Total",
        Label::Pending => "Pendentes",
        Label::Settled => "Pagas/Recebidas",
        Label::Unknown => "Desconhecido",
        Label::Payables => "Contas a Pagar",
        Label::Receivables => "Contas a Receber",
        Label::PayablesDue => "Contas a Pagar",
        Label::ReceivablesDue => "Contas a Receber",
        Label::Net => "Saldo",
        Label::Window => "Período",
        Label::NoData => "Nenhum dado disponível para exibição.",
        Label::SkippedRows => "Linhas ignoradas",
        Label::ExcludedSuppliers => "Fornecedores não exibidos",
        Label::OrphanedReceivables => "Contas sem cliente",
        Label::Clients => "Clientes",
        Label::Ledger => "Lançamentos",
        Label::Id => "Id",
        Label::Name => "Nome",
        Label::Email => "Email",
        Label::Phone => "Telefone",
        Label::Amount => "Valor",
        Label::DueDate => "Vencimento",
        Label::Date => "Data",
        Label::Description => "Descrição",
    }
}

/// Rendering context handed to every `format_terminal`
#[derive(Debug, Clone)]
pub struct Labels {
    pub locale: Locale,
    pub currency_symbol: String,
}

impl Labels {
    pub fn new(locale: Locale, currency_symbol: impl Into<String>) -> Self {
        Self {
            locale,
            currency_symbol: currency_symbol.into(),
        }
    }

    /// Display text for a label
    pub fn text(&self, label: Label) -> &'static str {
        self.locale.text(label)
    }

    /// Format an amount with the configured currency symbol
    pub fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::new(Locale::En, "R$")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parse() {
        assert_eq!("pt-BR".parse::<Locale>().unwrap(), Locale::PtBr);
        assert_eq!("pt_br".parse::<Locale>().unwrap(), Locale::PtBr);
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_labels_per_locale() {
        assert_eq!(Locale::En.text(Label::Settled), "Paid/Received");
        assert_eq!(Locale::PtBr.text(Label::Settled), "Pagas/Recebidas");
        assert_eq!(Locale::PtBr.text(Label::Revenue), "Receita");
    }

    #[test]
    fn test_money_uses_symbol() {
        let labels = Labels::new(Locale::PtBr, "R$");
        assert_eq!(labels.money(Money::from_cents(123456)), "R$ 1234.56");
    }

    #[test]
    fn test_locale_serde() {
        assert_eq!(serde_json::to_string(&Locale::PtBr).unwrap(), "\"pt-br\"");
    }
}
