use crate::constants::CURRENCY_EPSILON;
use crate::core::models::Expense;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use utoipa::ToSchema;

/// One expense this participant paid. Only `amount - own_share` (the portion
/// fronted for others) enters the calculation; `splits_total` is carried for
/// the record.
#[derive(Clone, Debug, PartialEq)]
pub struct PaidExpense {
    pub amount: f64,
    pub splits_total: f64,
    pub own_share: f64,
}

/// One expense this participant did not pay but holds a split in.
#[derive(Clone, Debug, PartialEq)]
pub struct OwedShare {
    pub amount: f64,
}

/// A participant's aggregate position. Positive `net_amount` means the
/// participant is owed money, negative means they owe money.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct BalanceEntry {
    pub user_id: String,
    pub user_name: String,
    pub net_amount: f64,
}

/// Net balance for one participant: total fronted for others minus total
/// owed to others. Empty inputs yield zero.
pub fn net_balance(paid: &[PaidExpense], owed: &[OwedShare]) -> f64 {
    let fronted: f64 = paid.iter().map(|e| e.amount - e.own_share).sum();
    let owed_total: f64 = owed.iter().map(|e| e.amount).sum();
    fronted - owed_total
}

/// Aggregates an already-fetched, explicitly-scoped expense set into one
/// `BalanceEntry` per participant with a non-negligible balance.
///
/// Participants are visited in first-appearance order (payer before split
/// holders, expenses in slice order) so the output is deterministic for a
/// given expense list. Participants missing from `names` are skipped, and
/// balances within `CURRENCY_EPSILON` of zero are dropped; the remainder
/// is exactly the input `simplify_debts` expects.
pub fn participant_balances(
    expenses: &[Expense],
    names: &HashMap<String, String>,
) -> Vec<BalanceEntry> {
    let mut participants: Vec<&str> = Vec::new();
    let mut seen = HashSet::new();
    for expense in expenses {
        for user_id in std::iter::once(expense.payer_id.as_str())
            .chain(expense.splits.iter().map(|s| s.user_id.as_str()))
        {
            if seen.insert(user_id) {
                participants.push(user_id);
            }
        }
    }

    let mut balances = Vec::new();
    for user_id in participants {
        let Some(name) = names.get(user_id) else {
            continue;
        };

        let paid: Vec<PaidExpense> = expenses
            .iter()
            .filter(|e| e.payer_id == user_id)
            .map(|e| PaidExpense {
                amount: e.amount,
                splits_total: e.splits.iter().map(|s| s.amount_owed).sum(),
                own_share: e.split_for(user_id).map(|s| s.amount_owed).unwrap_or(0.0),
            })
            .collect();

        let owed: Vec<OwedShare> = expenses
            .iter()
            .filter(|e| e.payer_id != user_id)
            .filter_map(|e| e.split_for(user_id))
            .map(|s| OwedShare {
                amount: s.amount_owed,
            })
            .collect();

        let net_amount = net_balance(&paid, &owed);
        if net_amount.abs() > CURRENCY_EPSILON {
            balances.push(BalanceEntry {
                user_id: user_id.to_string(),
                user_name: name.clone(),
                net_amount,
            });
        }
    }

    balances
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{ExpenseCategory, ExpenseSplit};
    use chrono::Utc;

    fn expense(id: &str, payer: &str, amount: f64, splits: &[(&str, f64)]) -> Expense {
        Expense {
            id: id.to_string(),
            group_id: "g1".to_string(),
            description: "test".to_string(),
            amount,
            category: ExpenseCategory::Other,
            date: Utc::now(),
            payer_id: payer.to_string(),
            created_by: payer.to_string(),
            splits: splits
                .iter()
                .map(|(user_id, amount_owed)| ExpenseSplit {
                    user_id: user_id.to_string(),
                    amount_owed: *amount_owed,
                })
                .collect(),
            reversed: false,
            created_at: Utc::now(),
        }
    }

    fn names(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(id, name)| (id.to_string(), name.to_string()))
            .collect()
    }

    #[test]
    fn net_balance_empty_inputs_is_zero() {
        assert_eq!(net_balance(&[], &[]), 0.0);
    }

    #[test]
    fn net_balance_counts_only_the_portion_fronted_for_others() {
        let paid = vec![PaidExpense {
            amount: 90.0,
            splits_total: 90.0,
            own_share: 30.0,
        }];
        assert_eq!(net_balance(&paid, &[]), 60.0);
    }

    #[test]
    fn net_balance_subtracts_owed_shares() {
        let paid = vec![
            PaidExpense {
                amount: 100.0,
                splits_total: 100.0,
                own_share: 50.0,
            },
            PaidExpense {
                amount: 30.0,
                splits_total: 30.0,
                own_share: 10.0,
            },
        ];
        let owed = vec![OwedShare { amount: 25.0 }, OwedShare { amount: 15.0 }];
        assert_eq!(net_balance(&paid, &owed), 50.0 + 20.0 - 40.0);
    }

    #[test]
    fn aggregates_one_entry_per_participant() {
        // Alice pays 90 split three ways; Bob pays 30 split between Bob and Carol.
        let expenses = vec![
            expense("e1", "a", 90.0, &[("a", 30.0), ("b", 30.0), ("c", 30.0)]),
            expense("e2", "b", 30.0, &[("b", 15.0), ("c", 15.0)]),
        ];
        let names = names(&[("a", "Alice"), ("b", "Bob"), ("c", "Carol")]);

        let balances = participant_balances(&expenses, &names);

        // First-appearance order: a (payer of e1), b, c.
        assert_eq!(balances.len(), 3);
        assert_eq!(balances[0].user_id, "a");
        assert_eq!(balances[0].net_amount, 60.0);
        assert_eq!(balances[1].user_id, "b");
        assert_eq!(balances[1].net_amount, 15.0 - 30.0);
        assert_eq!(balances[2].user_id, "c");
        assert_eq!(balances[2].net_amount, -45.0);
    }

    #[test]
    fn drops_participants_with_negligible_balance() {
        // Dave pays 20 and owes 20 across two expenses: net zero.
        let expenses = vec![
            expense("e1", "d", 20.0, &[("e", 20.0)]),
            expense("e2", "e", 20.0, &[("d", 20.0)]),
        ];
        let names = names(&[("d", "Dave"), ("e", "Erin")]);

        assert!(participant_balances(&expenses, &names).is_empty());
    }

    #[test]
    fn skips_participants_without_a_known_name() {
        let expenses = vec![expense("e1", "a", 50.0, &[("b", 50.0)])];
        let names = names(&[("a", "Alice")]);

        let balances = participant_balances(&expenses, &names);
        assert_eq!(balances.len(), 1);
        assert_eq!(balances[0].user_id, "a");
    }

    #[test]
    fn empty_expense_set_yields_no_balances() {
        assert!(participant_balances(&[], &HashMap::new()).is_empty());
    }
}
