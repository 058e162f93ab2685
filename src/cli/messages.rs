use crate::ledger::Category;

/// Friendly confirmation shown after an expense is recorded.
pub fn added_message(category: Category, total: &str) -> String {
    match category {
        Category::FoodDining => {
            format!("More food expenses? Somebody's eating good! Total: {total}. Don't forget dessert!")
        }
        Category::LeisureShopping => {
            format!("Retail therapy is valid. Total: {total}. But remember, no refunds on impulse buys!")
        }
        Category::Transportation => {
            format!("Gas, tickets, rides... places to be! Total: {total}.")
        }
        Category::Household => format!("Home sweet home... Total: {total}."),
        Category::FamilyEducation => {
            format!("Investing in the family? Love that for you! Total: {total}. Smart moves!")
        }
        Category::HealthWellness => {
            format!("Treating yourself right! Stay healthy. Total: {total}.")
        }
        Category::Other => {
            format!("{total} spent on miscellaneous, every detail counts. Thanks for keeping track!")
        }
    }
}

pub fn removed_message(id: u64) -> String {
    format!("Expense with ID {id} has been deleted.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_mentions_total() {
        for category in Category::ALL {
            assert!(added_message(category, "$12.00").contains("$12.00"));
        }
    }
}
