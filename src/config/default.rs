// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# ocm configuration file

# Structural rules
[rules]
# Accept messages that consist of the subject line alone
allow_one_liners = false
# Require a "Signed-off-by: Name <email>" line in the body
enforce_sign_off = false
max_subject_length = 50
max_body_line_length = 72

# Imperative verbs accepted on top of the built-in list.
# Either a TOML array or a string delimited by newlines, commas or semicolons.
[verbs]
additional = []
# path = "ocm-verbs.txt"

# Reporting
[output]
# Print violations but exit with status 0
dont_throw = false
color = true
"#
}
