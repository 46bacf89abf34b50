use crate::config::ClistConfig;
use battleboard_domain::{Contest, Platform};
use chrono::{NaiveDateTime, TimeZone, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::error;

const CLIST_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Which contests to list. Timestamps are in millis.
#[derive(Debug, Clone)]
pub struct ContestQuery {
    pub start_gte: i64,
    pub end_lte: i64,
    pub platforms: Vec<Platform>,
}

impl ContestQuery {
    const DAY_MILLIS: i64 = 1000 * 60 * 60 * 24;

    /// Contests from the last week and the coming month on every supported platform
    pub fn around(now: i64) -> Self {
        Self {
            start_gte: now - 7 * Self::DAY_MILLIS,
            end_lte: now + 30 * Self::DAY_MILLIS,
            platforms: Platform::all().to_vec(),
        }
    }
}

#[async_trait::async_trait]
pub trait IContestProvider: Send + Sync {
    /// Contests ordered by start time
    async fn list_contests(&self, query: &ContestQuery) -> anyhow::Result<Vec<Contest>>;
}

#[derive(Debug, Deserialize)]
struct ClistContest {
    id: i64,
    event: String,
    host: String,
    href: String,
    start: String,
    end: String,
    duration: i64,
}

#[derive(Debug, Deserialize)]
struct ClistContestsResponse {
    objects: Vec<ClistContest>,
}

fn parse_clist_datetime(datetime: &str) -> anyhow::Result<i64> {
    let naive = NaiveDateTime::parse_from_str(datetime, CLIST_DATETIME_FORMAT)?;
    Ok(Utc.from_utc_datetime(&naive).timestamp_millis())
}

fn format_clist_datetime(timestamp: i64) -> String {
    Utc.timestamp_millis_opt(timestamp)
        .single()
        .unwrap_or_else(Utc::now)
        .format(CLIST_DATETIME_FORMAT)
        .to_string()
}

impl TryFrom<ClistContest> for Contest {
    type Error = anyhow::Error;

    fn try_from(c: ClistContest) -> anyhow::Result<Self> {
        Ok(Self {
            id: c.id,
            start_ts: parse_clist_datetime(&c.start)?,
            end_ts: parse_clist_datetime(&c.end)?,
            event: c.event,
            host: c.host,
            href: c.href,
            duration: c.duration,
        })
    }
}

/// Client for the clist.by contest api
pub struct ClistContestApi {
    client: Client,
    config: ClistConfig,
}

impl ClistContestApi {
    pub fn new(config: ClistConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait::async_trait]
impl IContestProvider for ClistContestApi {
    async fn list_contests(&self, query: &ContestQuery) -> anyhow::Result<Vec<Contest>> {
        let hosts = query
            .platforms
            .iter()
            .map(|p| p.host())
            .collect::<Vec<_>>()
            .join(",");
        let mut req = self.client.get(&self.config.api_url).query(&[
            ("start__gte", format_clist_datetime(query.start_gte)),
            ("end__lte", format_clist_datetime(query.end_lte)),
            ("resource__in", hosts),
            ("orderby", "start".to_string()),
        ]);
        if let (Some(username), Some(api_key)) = (&self.config.username, &self.config.api_key) {
            req = req.header("authorization", format!("ApiKey {}:{}", username, api_key));
        }

        let res = req.send().await.map_err(|e| {
            error!("[Network Error] Clist API GET error. Error message: {:?}", e);
            anyhow::Error::new(e)
        })?;
        if !res.status().is_success() {
            let status = res.status();
            error!("[Unexpected Response] Clist API returned status: {}", status);
            anyhow::bail!("Failed to fetch contests: {}", status);
        }

        let body: ClistContestsResponse = res.json().await?;
        let mut contests = body
            .objects
            .into_iter()
            .map(Contest::try_from)
            .collect::<anyhow::Result<Vec<_>>>()?;
        contests.sort_by_key(|c| c.start_ts);
        Ok(contests)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn it_converts_clist_datetimes() {
        let ts = 1741530900000;
        assert_eq!(format_clist_datetime(ts), "2025-03-09T14:35:00");
        assert_eq!(parse_clist_datetime("2025-03-09T14:35:00").unwrap(), ts);
        assert!(parse_clist_datetime("yesterday").is_err());
    }

    #[tokio::test]
    async fn it_lists_contests_sorted_by_start() {
        let server = MockServer::start().await;
        let now = 1741530900000;
        Mock::given(method("GET"))
            .and(query_param("resource__in", "codeforces.com,codechef.com,leetcode.com"))
            .and(query_param("orderby", "start"))
            .and(query_param("start__gte", "2025-03-02T14:35:00"))
            .and(header("authorization", "ApiKey champ:key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "meta": { "total_count": 2 },
                "objects": [
                    {
                        "id": 2, "event": "Weekly Contest 440", "host": "leetcode.com",
                        "href": "https://leetcode.com/contest/weekly-contest-440",
                        "start": "2025-03-16T02:30:00", "end": "2025-03-16T04:00:00",
                        "duration": 5400, "resource": "leetcode.com"
                    },
                    {
                        "id": 1, "event": "Codeforces Round 1008", "host": "codeforces.com",
                        "href": "https://codeforces.com/contests/2077",
                        "start": "2025-03-09T14:35:00", "end": "2025-03-09T16:35:00",
                        "duration": 7200, "resource": "codeforces.com"
                    }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let api = ClistContestApi::new(ClistConfig {
            api_url: server.uri(),
            username: Some("champ".into()),
            api_key: Some("key".into()),
        });
        let contests = api
            .list_contests(&ContestQuery::around(now))
            .await
            .expect("To list contests");
        assert_eq!(contests.len(), 2);
        assert_eq!(contests[0].id, 1);
        assert_eq!(contests[0].start_ts, now);
        assert_eq!(contests[0].platform(), Some(Platform::Codeforces));
        assert_eq!(contests[1].platform(), Some(Platform::Leetcode));
    }

    #[tokio::test]
    async fn it_fails_on_provider_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let api = ClistContestApi::new(ClistConfig {
            api_url: server.uri(),
            username: None,
            api_key: None,
        });
        assert!(api.list_contests(&ContestQuery::around(0)).await.is_err());
    }
}
