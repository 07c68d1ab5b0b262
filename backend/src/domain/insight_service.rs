//! AI spending analysis.
//!
//! The provider boundary is a trait so the REST layer and tests never
//! depend on the Gemini HTTP API. Provider failure is absorbed here:
//! callers always get an `AiAnalysis`, worst case the static fallback.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{Datelike, Local, NaiveDate};
use log::{info, warn};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::errors::LedgerError;
use crate::domain::models::Transaction;
use crate::storage::LedgerStorage;

const GEMINI_MODEL: &str = "gemini-3-flash-preview";
const USER_AGENT: &str = concat!("nexo-backend/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq)]
pub struct AiAnalysis {
    pub summary: String,
    /// Spending change vs. the previous month, in percent.
    pub percentage_change: f64,
    pub alerts: Vec<String>,
}

impl AiAnalysis {
    /// Shown whenever the provider cannot deliver an analysis.
    pub fn fallback() -> Self {
        Self {
            summary: "Smart analysis is unavailable right now. Keep recording \
                      your transactions for better insights."
                .to_string(),
            percentage_change: 0.0,
            alerts: vec!["Keep your records up to date.".to_string()],
        }
    }
}

#[async_trait]
pub trait InsightProvider: Send + Sync {
    async fn analyze(&self, transactions: &[Transaction]) -> Result<AiAnalysis>;
}

pub struct InsightService {
    store: Arc<dyn LedgerStorage>,
    provider: Arc<dyn InsightProvider>,
}

impl InsightService {
    pub fn new(store: Arc<dyn LedgerStorage>, provider: Arc<dyn InsightProvider>) -> Self {
        Self { store, provider }
    }

    /// Analyze the user's transactions. A provider error is logged and
    /// replaced with the fallback analysis; the storage read is the only
    /// error surface left.
    pub async fn analyze(&self, user_id: &str) -> Result<AiAnalysis, LedgerError> {
        let ledger = self.store.get_ledger(user_id)?;
        match self.provider.analyze(&ledger.transactions).await {
            Ok(analysis) => Ok(analysis),
            Err(error) => {
                warn!("insight provider failed for user {user_id}: {error:#}");
                Ok(AiAnalysis::fallback())
            }
        }
    }
}

/// Gemini `generateContent` client in JSON mode.
pub struct GeminiInsightProvider {
    client: reqwest::Client,
    api_key: String,
}

impl GeminiInsightProvider {
    pub fn new(api_key: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .user_agent(USER_AGENT)
            .build()
            .context("build HTTP client")?;
        info!("Gemini insight provider configured (model {GEMINI_MODEL})");
        Ok(Self { client, api_key })
    }
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: String,
}

#[derive(Deserialize)]
struct AnalysisPayload {
    summary: String,
    #[serde(rename = "percentageChange")]
    percentage_change: f64,
    alerts: Vec<String>,
}

#[async_trait]
impl InsightProvider for GeminiInsightProvider {
    async fn analyze(&self, transactions: &[Transaction]) -> Result<AiAnalysis> {
        let today = Local::now().date_naive();
        let (current, previous) = split_by_month(transactions, today);
        let prompt = build_prompt(&current, &previous)?;

        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{GEMINI_MODEL}:generateContent?key={}",
            self.api_key
        );
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "summary": { "type": "STRING" },
                        "percentageChange": { "type": "NUMBER" },
                        "alerts": { "type": "ARRAY", "items": { "type": "STRING" } }
                    },
                    "required": ["summary", "percentageChange", "alerts"]
                }
            }
        });

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .context("send Gemini request")?
            .error_for_status()
            .context("Gemini returned an error status")?
            .json::<GenerateContentResponse>()
            .await
            .context("decode Gemini response")?;

        let text = response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
            .context("Gemini response had no candidates")?;
        let payload: AnalysisPayload =
            serde_json::from_str(text).context("parse analysis JSON")?;

        Ok(AiAnalysis {
            summary: payload.summary,
            percentage_change: payload.percentage_change,
            alerts: payload.alerts,
        })
    }
}

/// Partition transactions into (current month, previous month) relative
/// to `today`. January's previous month is last year's December.
fn split_by_month(
    transactions: &[Transaction],
    today: NaiveDate,
) -> (Vec<Transaction>, Vec<Transaction>) {
    let current_key = (today.year(), today.month());
    let previous_key = if today.month() == 1 {
        (today.year() - 1, 12)
    } else {
        (today.year(), today.month() - 1)
    };

    let mut current = Vec::new();
    let mut previous = Vec::new();
    for transaction in transactions {
        let key = (transaction.date.year(), transaction.date.month());
        if key == current_key {
            current.push(transaction.clone());
        } else if key == previous_key {
            previous.push(transaction.clone());
        }
    }
    (current, previous)
}

fn build_prompt(current: &[Transaction], previous: &[Transaction]) -> Result<String> {
    Ok(format!(
        "Analyze the following financial data and return a JSON object.\n\
         Current month transactions: {}\n\
         Previous month transactions: {}\n\n\
         Produce:\n\
         1. A friendly, direct summary.\n\
         2. The percentage change in spending compared to the previous month.\n\
         3. Three practical alerts or tips based on the spending habits.\n\
         Use refined but accessible language.",
        serde_json::to_string(current).context("serialize current month")?,
        serde_json::to_string(previous).context("serialize previous month")?,
    ))
}
