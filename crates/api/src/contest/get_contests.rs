use crate::error::BattleBoardError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use battleboard_api_structs::get_contests::*;
use battleboard_domain::Contest;
use battleboard_infra::{BattleBoardContext, ContestQuery};

pub async fn get_contests_controller(
    ctx: web::Data<BattleBoardContext>,
) -> Result<HttpResponse, BattleBoardError> {
    execute(GetContestsUseCase, &ctx)
        .await
        .map(|contests| HttpResponse::Ok().json(APIResponse::new(contests)))
        .map_err(BattleBoardError::from)
}

/// Lists contests from the past week and the coming month on the supported platforms
#[derive(Debug)]
pub struct GetContestsUseCase;

#[derive(Debug)]
pub enum UseCaseError {
    ProviderError,
}

impl From<UseCaseError> for BattleBoardError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::ProviderError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetContestsUseCase {
    type Response = Vec<Contest>;
    type Error = UseCaseError;

    const NAME: &'static str = "GetContests";

    async fn execute(&mut self, ctx: &BattleBoardContext) -> Result<Self::Response, Self::Error> {
        let query = ContestQuery::around(ctx.sys.get_timestamp_millis());
        ctx.contests
            .list_contests(&query)
            .await
            .map_err(|_| UseCaseError::ProviderError)
    }
}

#[cfg(test)]
pub mod test {
    use super::*;
    use battleboard_infra::IContestProvider;
    use std::sync::{Arc, Mutex};

    /// Serves a fixed list of contests and records the queries it gets
    #[derive(Default)]
    pub struct FakeContestProvider {
        pub contests: Vec<Contest>,
        pub fail: bool,
        pub queries: Mutex<Vec<ContestQuery>>,
    }

    #[async_trait::async_trait]
    impl IContestProvider for FakeContestProvider {
        async fn list_contests(&self, query: &ContestQuery) -> anyhow::Result<Vec<Contest>> {
            self.queries.lock().unwrap().push(query.clone());
            if self.fail {
                return Err(anyhow::Error::msg("Provider is down"));
            }
            Ok(self.contests.clone())
        }
    }

    pub fn contest(id: i64, host: &str) -> Contest {
        Contest {
            id,
            event: format!("Round {}", id),
            host: host.into(),
            href: format!("https://{}/contest/{}", host, id),
            start_ts: 1741530900000,
            end_ts: 1741538100000,
            duration: 7200,
        }
    }

    #[actix_web::test]
    async fn it_queries_listing_window_around_now() {
        let mut ctx = BattleBoardContext::create_inmemory();
        let provider = Arc::new(FakeContestProvider {
            contests: vec![contest(1, "codeforces.com")],
            ..Default::default()
        });
        ctx.contests = provider.clone();
        let now = ctx.sys.get_timestamp_millis();
        ctx.sys = Arc::new(battleboard_infra::StaticTimeSys(now));

        let contests = GetContestsUseCase.execute(&ctx).await.unwrap();
        assert_eq!(contests.len(), 1);

        let queries = provider.queries.lock().unwrap();
        let day = 1000 * 60 * 60 * 24;
        assert_eq!(queries[0].start_gte, now - 7 * day);
        assert_eq!(queries[0].end_lte, now + 30 * day);
        assert_eq!(queries[0].platforms.len(), 3);
    }

    #[actix_web::test]
    async fn it_fails_when_provider_fails() {
        let mut ctx = BattleBoardContext::create_inmemory();
        ctx.contests = Arc::new(FakeContestProvider {
            fail: true,
            ..Default::default()
        });

        assert!(GetContestsUseCase.execute(&ctx).await.is_err());
    }
}
