//! User-visible notification texts.

pub const RULES_FETCH_FAILED: &str = "Failed to fetch rules.";
pub const RULE_ADDED: &str = "Rule Added Successfully";
pub const RULE_ADD_FAILED: &str = "Failed to add rule.";
pub const RULE_DELETE_FAILED: &str = "Failed to delete rule.";
pub const RULE_EVALUATED: &str = "Rule Evaluated Successfully";
pub const RULE_EVALUATE_FAILED: &str = "Failed to evaluate the rule.";
pub const INVALID_USER_DATA: &str = "Invalid JSON format in the user data.";
pub const SIGN_IN_FAILED: &str = "Sign in failed. Please try again.";
