//! Plain-text rendering of ledger records for the CLI.

use ggoolmoney_core::config::DisplayConfig;
use ggoolmoney_core::dates::format_date;
use ggoolmoney_core::types::{format_amount, Tab, Transaction};

/// Label used for transactions without a tab.
pub const UNCLASSIFIED: &str = "미분류";

/// One transaction per line:
/// `<id>  <date>  <tab>  <description> (<memo>)  <amount>`.
pub fn transaction_line(tx: &Transaction, tab: Option<&Tab>, display: &DisplayConfig) -> String {
    let tab_label = match tab {
        Some(tab) => format!("{} {}", tab.icon, tab.name),
        None => UNCLASSIFIED.to_string(),
    };
    let mut description = tx.description.clone();
    if display.show_memo {
        if let Some(memo) = tx.memo.as_deref().filter(|m| !m.is_empty()) {
            description.push_str(&format!(" ({memo})"));
        }
    }
    format!(
        "{}  {}  {}  {}  {}{}",
        tx.id,
        format_date(tx.date),
        tab_label,
        description,
        display.currency_symbol,
        format_amount(tx.amount)
    )
}

pub fn tab_line(tab: &Tab) -> String {
    format!("{}  {} {}  {}", tab.id, tab.icon, tab.name, tab.color)
}

/// Render a filtered list, or the empty-list message.
pub fn transaction_list(list: &[&Transaction], tabs: &[Tab], display: &DisplayConfig) -> String {
    if list.is_empty() {
        return "텅 비었어요! 🐝".to_string();
    }
    list.iter()
        .map(|tx| {
            let tab = tx.tab_id.as_deref().and_then(|id| tabs.iter().find(|t| t.id == id));
            transaction_line(tx, tab, display)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ggoolmoney_core::types::default_tabs;

    fn coffee() -> Transaction {
        Transaction {
            id: "1705300000000".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            description: "스타벅스".into(),
            amount: 4500.0,
            memo: Some("아이스 라떼".into()),
            tab_id: Some("food".into()),
            created_at: 1_705_300_000_000,
        }
    }

    #[test]
    fn renders_tab_and_memo() {
        let tabs = default_tabs();
        let tx = coffee();
        let line = transaction_line(&tx, tabs.first(), &DisplayConfig::default());
        insta::assert_snapshot!(line, @"1705300000000  2024년 1월 15일  🍔 식비  스타벅스 (아이스 라떼)  ₩4,500");
    }

    #[test]
    fn hides_memo_when_configured() {
        let display = DisplayConfig {
            show_memo: false,
            ..DisplayConfig::default()
        };
        let line = transaction_line(&coffee(), None, &display);
        assert_eq!(line, "1705300000000  2024년 1월 15일  미분류  스타벅스  ₩4,500");
    }

    #[test]
    fn empty_list_message() {
        assert_eq!(transaction_list(&[], &[], &DisplayConfig::default()), "텅 비었어요! 🐝");
    }
}
