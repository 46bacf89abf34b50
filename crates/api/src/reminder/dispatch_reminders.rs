use crate::shared::usecase::UseCase;
use battleboard_infra::BattleBoardContext;
use tracing::{error, info};

/// One sweep over every stored `ReminderPreference`, sending a reminder through
/// the matching channel for each preference that is currently due.
///
/// Nothing is written back, so a preference is sent again on every scan while
/// it stays inside its due window.
#[derive(Debug)]
pub struct DispatchRemindersUseCase;

/// What happened during one scan
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DispatchReport {
    pub users_scanned: usize,
    pub due: usize,
    pub sent: usize,
    pub failed: usize,
    /// Due reminders whose owner has no contact information for the method
    pub skipped_no_contact: usize,
    /// Reminders without a usable contest start time
    pub skipped_malformed: usize,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for DispatchRemindersUseCase {
    type Response = DispatchReport;
    type Error = UseCaseError;

    const NAME: &'static str = "DispatchReminders";

    async fn execute(&mut self, ctx: &BattleBoardContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.get_timestamp_millis();
        info!(now, "Running reminder scan");

        let users = ctx.repos.users.find_with_reminders().await.map_err(|e| {
            error!("Unable to read reminder preferences, aborting scan: {:?}", e);
            UseCaseError::StorageError
        })?;

        let mut report = DispatchReport {
            users_scanned: users.len(),
            ..Default::default()
        };

        for user in &users {
            for reminder in &user.reminder_preferences {
                let (notification, window) =
                    match (reminder.notification(), reminder.due_window()) {
                        (Some(notification), Some(window)) => (notification, window),
                        _ => {
                            report.skipped_malformed += 1;
                            continue;
                        }
                    };
                if !window.contains(now) {
                    continue;
                }
                report.due += 1;

                let target = match user.delivery_target(reminder.method) {
                    Some(target) => target,
                    None => {
                        report.skipped_no_contact += 1;
                        continue;
                    }
                };

                match ctx.channels.deliver(&target, &notification).await {
                    Ok(receipt) => {
                        report.sent += 1;
                        info!(
                            user_id = %user.id,
                            contest_id = reminder.contest_id,
                            method = %reminder.method,
                            message_id = ?receipt.message_id,
                            "Reminder sent"
                        );
                    }
                    Err(e) => {
                        report.failed += 1;
                        error!(
                            user_id = %user.id,
                            contest_id = reminder.contest_id,
                            method = %reminder.method,
                            "Unable to send reminder: {}",
                            e
                        );
                    }
                }
            }
        }

        info!(
            users = report.users_scanned,
            due = report.due,
            sent = report.sent,
            failed = report.failed,
            skipped_no_contact = report.skipped_no_contact,
            skipped_malformed = report.skipped_malformed,
            "Reminder scan finished"
        );
        Ok(report)
    }
}
