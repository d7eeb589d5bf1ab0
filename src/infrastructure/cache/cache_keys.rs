pub fn simplified_debts_key(group_id: &str) -> String {
    format!("simplified_debts:{}", group_id)
}
