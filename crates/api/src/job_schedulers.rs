use crate::{
    reminder::dispatch_reminders::{DispatchReport, DispatchRemindersUseCase},
    shared::usecase::execute,
};
use actix_web::rt::{task::JoinHandle, time::sleep};
use battleboard_infra::BattleBoardContext;
use chrono::{TimeZone, Utc};
use cron::Schedule;
use std::{str::FromStr, time::Duration};
use tokio::sync::oneshot;
use tracing::{info, warn};

/// Periodically scans all reminder preferences and sends the due ones.
///
/// Scans run on the job's own task one after another, so a slow scan delays
/// the next one instead of overlapping with it.
pub struct ReminderDispatchJob {
    ctx: BattleBoardContext,
    schedule: Schedule,
    scan_on_startup: bool,
}

/// Handle to a running `ReminderDispatchJob`
pub struct ReminderDispatchJobHandle {
    stop: oneshot::Sender<()>,
    join: JoinHandle<usize>,
}

impl ReminderDispatchJobHandle {
    /// Stops the job once the current scan, if any, is done. Returns how many
    /// scans the job ran.
    pub async fn stop(self) -> usize {
        // The job may already have ended on its own
        let _ = self.stop.send(());
        self.join.await.unwrap_or(0)
    }
}

impl ReminderDispatchJob {
    pub fn new(ctx: BattleBoardContext) -> anyhow::Result<Self> {
        let schedule = Schedule::from_str(&ctx.config.reminders.cron_expression)?;
        Ok(Self {
            scan_on_startup: ctx.config.reminders.scan_on_startup,
            ctx,
            schedule,
        })
    }

    pub fn scan_on_startup(mut self, scan_on_startup: bool) -> Self {
        self.scan_on_startup = scan_on_startup;
        self
    }

    pub fn start(self) -> ReminderDispatchJobHandle {
        let (stop, stop_rx) = oneshot::channel();
        let join = actix_web::rt::spawn(self.run(stop_rx));
        ReminderDispatchJobHandle { stop, join }
    }

    /// Time until the next scheduled scan
    fn next_delay(&self) -> Option<Duration> {
        let now_ts = self.ctx.sys.get_timestamp_millis();
        let now = Utc.timestamp_millis_opt(now_ts).single()?;
        let next = self.schedule.after(&now).next()?;
        (next - now).to_std().ok()
    }

    async fn scan(&self) -> Option<DispatchReport> {
        execute(DispatchRemindersUseCase, &self.ctx).await.ok()
    }

    async fn run(self, mut stop: oneshot::Receiver<()>) -> usize {
        let mut scans = 0;
        if self.scan_on_startup {
            info!("Running reminder scan on startup");
            self.scan().await;
            scans += 1;
        }

        loop {
            let delay = match self.next_delay() {
                Some(delay) => delay,
                None => {
                    warn!("The reminder schedule has no upcoming runs, stopping reminder job");
                    break;
                }
            };

            tokio::select! {
                _ = &mut stop => {
                    info!("Stopping reminder job");
                    break;
                }
                _ = sleep(delay) => {
                    self.scan().await;
                    scans += 1;
                }
            }
        }

        scans
    }
}

pub fn start_reminder_dispatch_job(
    ctx: BattleBoardContext,
) -> anyhow::Result<ReminderDispatchJobHandle> {
    let job = ReminderDispatchJob::new(ctx)?;
    Ok(job.start())
}
