mod bookmark;
mod contest;
mod error;
mod job_schedulers;
mod note;
mod reminder;
mod shared;
mod status;
mod user;

use actix_cors::Cors;
use actix_web::{dev::Server, http::header, middleware, web, App, HttpServer};
use battleboard_infra::BattleBoardContext;
use std::net::TcpListener;
use tracing::{error, info};
use tracing_actix_web::TracingLogger;

pub use error::BattleBoardError;
pub use job_schedulers::{ReminderDispatchJob, ReminderDispatchJobHandle};
pub use reminder::dispatch_reminders::{DispatchReport, DispatchRemindersUseCase};

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    bookmark::configure_routes(cfg);
    contest::configure_routes(cfg);
    note::configure_routes(cfg);
    reminder::configure_routes(cfg);
    status::configure_routes(cfg);
    user::configure_routes(cfg);
}

pub struct Application {
    server: Server,
    port: u16,
    reminder_job: Option<ReminderDispatchJobHandle>,
}

impl Application {
    pub async fn new(context: BattleBoardContext) -> Result<Self, std::io::Error> {
        let (server, port) = Application::configure_server(context.clone()).await?;
        let reminder_job = Application::start_job_schedulers(context);

        Ok(Self {
            server,
            port,
            reminder_job,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    fn start_job_schedulers(context: BattleBoardContext) -> Option<ReminderDispatchJobHandle> {
        match job_schedulers::start_reminder_dispatch_job(context) {
            Ok(handle) => Some(handle),
            Err(e) => {
                error!(
                    "Invalid reminder schedule, reminders will not be sent. Error: {:?}",
                    e
                );
                None
            }
        }
    }

    async fn configure_server(
        context: BattleBoardContext,
    ) -> Result<(Server, u16), std::io::Error> {
        let port = context.config.port;
        let address = format!("0.0.0.0:{}", port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();
        info!("Listening on port: {}", port);

        let server = HttpServer::new(move || {
            let ctx = context.clone();
            let cors = Cors::default()
                .allowed_origin(&ctx.config.cors_origin)
                .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
                .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE])
                .supports_credentials()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .wrap(middleware::Compress::default())
                .wrap(TracingLogger::default())
                .app_data(web::Data::new(ctx))
                .service(web::scope("/api/v1").configure(configure_server_api))
        })
        .listen(listener)?
        .workers(4)
        .run();

        Ok((server, port))
    }

    pub async fn start(self) -> Result<(), std::io::Error> {
        let res = self.server.await;
        if let Some(reminder_job) = self.reminder_job {
            reminder_job.stop().await;
        }
        res
    }
}
