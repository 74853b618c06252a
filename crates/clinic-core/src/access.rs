//! Role-based UI section visibility.
//!
//! Four role labels map to fixed, ordered section lists. The table is
//! process-wide read-only configuration; nothing mutates it at runtime. The
//! resolver only reports what a role should see — enforcement belongs to the
//! caller.

use indexmap::IndexMap;
use once_cell::sync::Lazy;

/// Role label carried by clinic-administrator accounts.
pub const ADMIN_ROLE: &str = "診所管理";

/// Substring marking a role as managerial regardless of the exact label.
const ADMIN_MARKER: &str = "管理";

/// Email address that is always granted the user-management section.
const ADMIN_EMAIL: &str = "admin@clinic.com";

const USER_MANAGEMENT: &str = "userManagement";

static ROLE_PERMISSIONS: Lazy<IndexMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| {
        IndexMap::from([
            (
                ADMIN_ROLE,
                &[
                    "patientManagement",
                    "consultationSystem",
                    "medicalRecordManagement",
                    "herbLibrary",
                    "acupointLibrary",
                    "templateLibrary",
                    "scheduleManagement",
                    "billingManagement",
                    "userManagement",
                    "financialReports",
                    "systemManagement",
                    "accountSecurity",
                ][..],
            ),
            (
                "醫師",
                &[
                    "patientManagement",
                    "consultationSystem",
                    "medicalRecordManagement",
                    "herbLibrary",
                    "acupointLibrary",
                    "templateLibrary",
                    "scheduleManagement",
                    "billingManagement",
                    "personalSettings",
                    "personalStatistics",
                    "accountSecurity",
                ][..],
            ),
            (
                "護理師",
                &[
                    "patientManagement",
                    "consultationSystem",
                    "medicalRecordManagement",
                    "herbLibrary",
                    "acupointLibrary",
                    "templateLibrary",
                    "scheduleManagement",
                    "accountSecurity",
                ][..],
            ),
            (
                "用戶",
                &[
                    "patientManagement",
                    "consultationSystem",
                    "templateLibrary",
                    "accountSecurity",
                ][..],
            ),
        ])
    });

/// Resolve the ordered set of UI sections a role may see.
///
/// The trimmed `position` is looked up in the fixed role table; unknown
/// roles start from an empty list. The administrative override then applies:
/// the admin role itself, any label containing the managerial marker, or the
/// hardcoded admin email (trimmed, case-insensitive) gains `userManagement`
/// exactly once.
pub fn derive_allowed_sections(position: &str, email: &str) -> Vec<String> {
    let position = position.trim();
    let email = email.trim().to_lowercase();

    let mut allowed: Vec<String> = ROLE_PERMISSIONS
        .get(position)
        .map(|sections| sections.iter().map(|s| (*s).to_string()).collect())
        .unwrap_or_default();

    let is_admin =
        position == ADMIN_ROLE || position.contains(ADMIN_MARKER) || email == ADMIN_EMAIL;
    if is_admin && !allowed.iter().any(|section| section == USER_MANAGEMENT) {
        allowed.push(USER_MANAGEMENT.to_string());
    }

    allowed
}
