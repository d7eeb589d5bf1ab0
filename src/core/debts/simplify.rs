use crate::constants::CURRENCY_EPSILON;
use crate::core::debts::balance::BalanceEntry;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One transfer instruction: `from_user_id` pays `to_user_id` `amount`.
/// Amounts are always strictly greater than `CURRENCY_EPSILON`.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SettlementTransaction {
    pub from_user_id: String,
    pub from_user_name: String,
    pub to_user_id: String,
    pub to_user_name: String,
    pub amount: f64,
}

/// Computes a settlement plan that zeroes every balance, repeatedly matching
/// the largest creditor against the largest debtor.
///
/// The greedy pairing emits at most `n - 1` transactions for `n` non-zero
/// balances but is an approximation: the true minimum-transaction plan is
/// NP-hard to find once four or more parties hold heterogeneous amounts.
/// Balances within `CURRENCY_EPSILON` of zero are treated as settled noise
/// and never produce a transaction. If the input does not sum to zero the
/// residual is silently left unsettled.
///
/// The caller's slice is never mutated; the walk runs over an internal copy.
pub fn simplify_debts(balances: &[BalanceEntry]) -> Vec<SettlementTransaction> {
    let mut entries = balances.to_vec();
    // Stable sort: equal balances keep their input order, so identical input
    // always yields an identical transaction sequence.
    entries.sort_by(|a, b| b.net_amount.total_cmp(&a.net_amount));

    let mut transactions = Vec::new();
    if entries.is_empty() {
        return transactions;
    }

    let mut top_creditor = 0;
    let mut top_debtor = entries.len() - 1;

    while top_creditor < top_debtor {
        if entries[top_debtor].net_amount >= 0.0 {
            break; // no debtors left
        }
        if entries[top_creditor].net_amount <= 0.0 {
            break; // no creditors left
        }

        let settlement = entries[top_debtor]
            .net_amount
            .abs()
            .min(entries[top_creditor].net_amount);

        if settlement > CURRENCY_EPSILON {
            transactions.push(SettlementTransaction {
                from_user_id: entries[top_debtor].user_id.clone(),
                from_user_name: entries[top_debtor].user_name.clone(),
                to_user_id: entries[top_creditor].user_id.clone(),
                to_user_name: entries[top_creditor].user_name.clone(),
                amount: settlement,
            });
            entries[top_creditor].net_amount -= settlement;
            entries[top_debtor].net_amount += settlement;
        }

        // Retire any side at or below the epsilon. Every iteration either
        // emits (zeroing one side exactly) or skips (meaning one side was
        // already at or below the epsilon), so the loop always terminates.
        if entries[top_creditor].net_amount.abs() <= CURRENCY_EPSILON {
            top_creditor += 1;
        }
        if entries[top_debtor].net_amount.abs() <= CURRENCY_EPSILON {
            top_debtor -= 1;
        }
    }

    transactions
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn entry(user_id: &str, net_amount: f64) -> BalanceEntry {
        BalanceEntry {
            user_id: user_id.to_string(),
            user_name: user_id.to_uppercase(),
            net_amount,
        }
    }

    /// Applies a settlement plan to the original balances and returns the
    /// residual per participant.
    fn residuals(
        balances: &[BalanceEntry],
        transactions: &[SettlementTransaction],
    ) -> HashMap<String, f64> {
        let mut residual: HashMap<String, f64> = balances
            .iter()
            .map(|b| (b.user_id.clone(), b.net_amount))
            .collect();
        for tx in transactions {
            *residual.get_mut(&tx.from_user_id).unwrap() += tx.amount;
            *residual.get_mut(&tx.to_user_id).unwrap() -= tx.amount;
        }
        residual
    }

    #[test]
    fn two_debtors_pay_the_single_creditor() {
        let balances = vec![entry("a", 30.0), entry("b", -10.0), entry("c", -20.0)];

        let transactions = simplify_debts(&balances);

        // The walk starts at the most negative entry, so c settles first.
        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].from_user_id, "c");
        assert_eq!(transactions[0].to_user_id, "a");
        assert_eq!(transactions[0].amount, 20.0);
        assert_eq!(transactions[1].from_user_id, "b");
        assert_eq!(transactions[1].to_user_id, "a");
        assert_eq!(transactions[1].amount, 10.0);
    }

    #[test]
    fn single_debtor_pays_two_creditors_exactly() {
        let balances = vec![entry("a", 10.0), entry("b", 5.0), entry("c", -15.0)];

        let transactions = simplify_debts(&balances);

        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].from_user_id, "c");
        assert_eq!(transactions[0].to_user_id, "a");
        assert_eq!(transactions[0].amount, 10.0);
        assert_eq!(transactions[1].from_user_id, "c");
        assert_eq!(transactions[1].to_user_id, "b");
        assert_eq!(transactions[1].amount, 5.0);
    }

    #[test]
    fn three_debtors_settle_in_walk_order() {
        let balances = vec![
            entry("a", 100.0),
            entry("b", -40.0),
            entry("c", -30.0),
            entry("d", -30.0),
        ];

        let transactions = simplify_debts(&balances);

        assert_eq!(transactions.len(), 3);
        for tx in &transactions {
            assert_eq!(tx.to_user_id, "a");
        }
        // Most negative first (b), then the -30 pair walked from the bottom
        // of the stable descending order (d before c).
        assert_eq!(transactions[0].from_user_id, "b");
        assert_eq!(transactions[0].amount, 40.0);
        assert_eq!(transactions[1].from_user_id, "d");
        assert_eq!(transactions[1].amount, 30.0);
        assert_eq!(transactions[2].from_user_id, "c");
        assert_eq!(transactions[2].amount, 30.0);
    }

    #[test]
    fn balances_below_the_epsilon_produce_nothing() {
        let balances = vec![entry("a", 0.005), entry("b", -0.005)];
        assert!(simplify_debts(&balances).is_empty());
    }

    #[test]
    fn balances_of_exactly_the_epsilon_are_settled_noise() {
        let balances = vec![entry("a", 0.01), entry("b", -0.01)];
        assert!(simplify_debts(&balances).is_empty());
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(simplify_debts(&[]).is_empty());
    }

    #[test]
    fn single_entry_yields_empty_output() {
        assert!(simplify_debts(&[entry("a", 42.0)]).is_empty());
    }

    #[test]
    fn all_zero_balances_yield_empty_output() {
        let balances = vec![entry("a", 0.0), entry("b", 0.0), entry("c", 0.0)];
        assert!(simplify_debts(&balances).is_empty());
    }

    #[test]
    fn equal_creditors_are_served_in_input_order() {
        let balances = vec![entry("a", 5.0), entry("b", 5.0), entry("c", -10.0)];

        let transactions = simplify_debts(&balances);

        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].to_user_id, "a");
        assert_eq!(transactions[1].to_user_id, "b");
    }

    #[test]
    fn caller_slice_is_not_mutated() {
        let balances = vec![entry("a", 30.0), entry("b", -30.0)];
        let before = balances.clone();

        let _ = simplify_debts(&balances);

        assert_eq!(balances, before);
    }

    #[test]
    fn identical_input_yields_identical_output() {
        let balances = vec![
            entry("a", 12.5),
            entry("b", -4.5),
            entry("c", -8.0),
            entry("d", 7.25),
            entry("e", -7.25),
        ];
        assert_eq!(simplify_debts(&balances), simplify_debts(&balances));
    }

    #[test]
    fn settlement_plan_zeroes_every_balance() {
        let balances = vec![
            entry("a", 55.4),
            entry("b", -12.15),
            entry("c", -20.0),
            entry("d", -23.25),
        ];

        let transactions = simplify_debts(&balances);

        for amount in residuals(&balances, &transactions).values() {
            assert!(amount.abs() <= 0.01, "residual {} too large", amount);
        }
        for tx in &transactions {
            assert!(tx.amount > 0.01);
        }
    }

    #[test]
    fn emits_at_most_n_minus_one_transactions() {
        let balances = vec![
            entry("a", 40.0),
            entry("b", 35.0),
            entry("c", -25.0),
            entry("d", -30.0),
            entry("e", -20.0),
        ];
        assert!(simplify_debts(&balances).len() <= balances.len() - 1);
    }

    #[test]
    fn resimplifying_a_settled_state_yields_nothing() {
        let balances = vec![
            entry("a", 18.0),
            entry("b", 7.0),
            entry("c", -16.0),
            entry("d", -9.0),
        ];

        let transactions = simplify_debts(&balances);
        let settled: Vec<BalanceEntry> = residuals(&balances, &transactions)
            .into_iter()
            .map(|(user_id, net_amount)| BalanceEntry {
                user_name: user_id.to_uppercase(),
                user_id,
                net_amount,
            })
            .collect();

        assert!(simplify_debts(&settled).is_empty());
    }

    #[test]
    fn unbalanced_input_terminates_and_leaves_the_residual_unsettled() {
        // Sums to +15: an upstream aggregation bug. The plan settles what it
        // can and leaves the rest without erroring.
        let balances = vec![entry("a", 40.0), entry("b", -25.0)];

        let transactions = simplify_debts(&balances);

        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].amount, 25.0);
        let residual = residuals(&balances, &transactions);
        assert_eq!(residual["a"], 15.0);
        assert_eq!(residual["b"], 0.0);
    }
}
