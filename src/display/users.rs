//! User display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{User, UserProfile};

#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "Username")]
    username: String,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "ID")]
    user_id: String,
    #[tabled(rename = "Profile")]
    profile: &'static str,
}

/// Format the user list as a table, marking users with a saved profile
pub fn format_user_list(users: &[User], with_profile: &[String]) -> String {
    if users.is_empty() {
        return "No users found.\n".to_string();
    }

    let mut table = Table::new(users.iter().map(|u| UserRow {
        username: u.username.clone(),
        state: u.state.clone().unwrap_or_else(|| "-".to_string()),
        user_id: u.user_id.to_string(),
        profile: if with_profile.contains(&u.username) {
            "yes"
        } else {
            "no"
        },
    }));
    table.with(Style::psql());
    format!("{}\n", table)
}

/// Format one user with their saved profile, if any
pub fn format_user_details(user: &User, profile: Option<&UserProfile>) -> String {
    let mut output = String::new();
    output.push_str(&format!("User:        {}\n", user.username));
    output.push_str(&format!("ID:          {}\n", user.user_id));
    output.push_str(&format!(
        "State:       {}\n",
        user.state.as_deref().unwrap_or("-")
    ));

    match profile {
        Some(profile) => {
            output.push_str(&format!("Income:      {}\n", profile.income));
            output.push_str(&format!("Tax Rate:    {:.1}%\n", profile.tax_rate * 100.0));
            output.push_str(&format!("Expenses:    {}\n", profile.transactions.len()));
            output.push_str(&format!(
                "Updated:     {}\n",
                profile.last_updated.format("%Y-%m-%d %H:%M")
            ));
        }
        None => output.push_str("No saved profile.\n"),
    }
    output
}
