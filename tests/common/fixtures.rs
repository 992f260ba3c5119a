//! Static ledger corpora used across harnesses.

use super::builders::TransactionBuilder;
use ggoolmoney_core::Transaction;

/// Merchant names mixing Hangul, Latin, and digits.
pub const MERCHANTS: &[&str] = &[
    "스타벅스 커피",
    "GS25 편의점",
    "김밥천국",
    "버스 교통카드 충전",
    "넷플릭스 구독",
    "이마트 장보기",
    "CGV 영화",
    "Cafe 123",
    "다이소",
    "올리브영",
];

/// A small ledger spread over the default tabs, plus one unclassified record.
///
/// | id | date       | description        | tab       | created |
/// |----|------------|--------------------|-----------|---------|
/// | t1 | 2024-01-15 | 스타벅스 커피      | food      | 1       |
/// | t2 | 2024-01-16 | 버스 교통카드 충전 | transport | 2       |
/// | t3 | 2024-01-16 | 넷플릭스 구독      | hobby     | 3       |
/// | t4 | 2024-01-17 | 다이소             | living    | 4       |
/// | t5 | 2024-01-18 | 선물               | (none)    | 5       |
pub fn sample_ledger() -> Vec<Transaction> {
    vec![
        TransactionBuilder::new("t1", "스타벅스 커피")
            .date("2024-01-15")
            .amount(4500.0)
            .memo("아이스 아메리카노")
            .tab("food")
            .created_at(1)
            .build(),
        TransactionBuilder::new("t2", "버스 교통카드 충전")
            .date("2024-01-16")
            .amount(30000.0)
            .tab("transport")
            .created_at(2)
            .build(),
        TransactionBuilder::new("t3", "넷플릭스 구독")
            .date("2024-01-16")
            .amount(13500.0)
            .memo("Premium plan")
            .tab("hobby")
            .created_at(3)
            .build(),
        TransactionBuilder::new("t4", "다이소")
            .date("2024-01-17")
            .amount(5000.0)
            .tab("living")
            .created_at(4)
            .build(),
        TransactionBuilder::new("t5", "선물")
            .date("2024-01-18")
            .amount(25000.0)
            .memo("생일")
            .created_at(5)
            .build(),
    ]
}

/// `n` synthetic transactions cycling through [`MERCHANTS`].
pub fn corpus_high_volume(n: usize) -> Vec<Transaction> {
    (0..n)
        .map(|i| {
            TransactionBuilder::new(format!("tx-{i}"), MERCHANTS[i % MERCHANTS.len()])
                .amount(((i % 50) + 1) as f64 * 1000.0)
                .created_at(i as i64)
                .build()
        })
        .collect()
}
