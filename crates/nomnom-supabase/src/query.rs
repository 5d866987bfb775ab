use std::fmt::Display;

use reqwest::{Method, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::client::{SupabaseClient, read_json};
use crate::error::{RemoteError, classify_rest};

/// Table-scoped PostgREST request under construction.
///
/// Filters accumulate in call order and are sent as `column=op.value` query
/// pairs. Nothing is sent until a terminal method runs.
#[derive(Debug)]
pub struct QueryBuilder {
    client: SupabaseClient,
    table: String,
    columns: Option<String>,
    filters: Vec<(String, String)>,
    order: Option<String>,
    limit: Option<u64>,
    offset: Option<u64>,
}

impl QueryBuilder {
    pub(crate) fn new(client: SupabaseClient, table: &str) -> Self {
        Self {
            client,
            table: table.to_owned(),
            columns: None,
            filters: Vec::new(),
            order: None,
            limit: None,
            offset: None,
        }
    }

    /// Column list, including embedded resources such as
    /// `"quantidade, Ingrediente(id, nome)"`. Whitespace is stripped.
    pub fn select(mut self, columns: &str) -> Self {
        self.columns = Some(columns.chars().filter(|c| !c.is_whitespace()).collect());
        self
    }

    pub fn eq(self, column: &str, value: impl Display) -> Self {
        self.filter(column, "eq", value)
    }

    pub fn gte(self, column: &str, value: impl Display) -> Self {
        self.filter(column, "gte", value)
    }

    pub fn lte(self, column: &str, value: impl Display) -> Self {
        self.filter(column, "lte", value)
    }

    /// `column=in.(a,b,c)`; values holding reserved characters are quoted.
    pub fn in_<I, V>(mut self, column: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Display,
    {
        let list = values
            .into_iter()
            .map(|v| quote_list_value(&v.to_string()))
            .collect::<Vec<_>>()
            .join(",");
        self.filters.push((column.to_owned(), format!("in.({list})")));
        self
    }

    pub fn order(mut self, column: &str, ascending: bool) -> Self {
        let dir = if ascending { "asc" } else { "desc" };
        self.order = Some(format!("{column}.{dir}"));
        self
    }

    pub fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    /// Inclusive row window `[from, to]`.
    pub fn range(mut self, from: u64, to: u64) -> Self {
        self.offset = Some(from);
        self.limit = Some(to.saturating_sub(from) + 1);
        self
    }

    fn filter(mut self, column: &str, op: &str, value: impl Display) -> Self {
        self.filters.push((column.to_owned(), format!("{op}.{value}")));
        self
    }

    fn url(&self) -> Url {
        let mut url = self.client.endpoint(&["rest", "v1", &self.table]);
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("select", self.columns.as_deref().unwrap_or("*"));
            for (column, expr) in &self.filters {
                pairs.append_pair(column, expr);
            }
            if let Some(order) = &self.order {
                pairs.append_pair("order", order);
            }
            if let Some(limit) = self.limit {
                pairs.append_pair("limit", &limit.to_string());
            }
            if let Some(offset) = self.offset {
                pairs.append_pair("offset", &offset.to_string());
            }
        }
        url
    }

    /// `GET` every matching row.
    pub async fn execute<T: DeserializeOwned>(self) -> Result<Vec<T>, RemoteError> {
        tracing::debug!(table = %self.table, filters = self.filters.len(), "select");
        let resp = self.client.request(Method::GET, self.url()).send().await?;
        read_json(resp, classify_rest).await
    }

    /// `GET` limited to one row; `None` when nothing matches.
    pub async fn maybe_single<T: DeserializeOwned>(self) -> Result<Option<T>, RemoteError> {
        let rows: Vec<T> = self.limit(1).execute().await?;
        Ok(rows.into_iter().next())
    }

    /// `POST` one row or an array of rows; returns the inserted rows.
    pub async fn insert<B, T>(self, body: &B) -> Result<Vec<T>, RemoteError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!(table = %self.table, "insert");
        let resp = self
            .client
            .request(Method::POST, self.url())
            .header("prefer", "return=representation")
            .json(body)
            .send()
            .await?;
        read_json(resp, classify_rest).await
    }

    /// `PATCH` matching rows; returns the updated rows (empty when none matched).
    pub async fn update<B, T>(self, body: &B) -> Result<Vec<T>, RemoteError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!(table = %self.table, filters = self.filters.len(), "update");
        let resp = self
            .client
            .request(Method::PATCH, self.url())
            .header("prefer", "return=representation")
            .json(body)
            .send()
            .await?;
        read_json(resp, classify_rest).await
    }

    /// `DELETE` matching rows; returns how many were removed.
    pub async fn delete(self) -> Result<usize, RemoteError> {
        tracing::debug!(table = %self.table, filters = self.filters.len(), "delete");
        let resp = self
            .client
            .request(Method::DELETE, self.url())
            .header("prefer", "return=representation")
            .send()
            .await?;
        let rows: Vec<serde_json::Value> = read_json(resp, classify_rest).await?;
        Ok(rows.len())
    }
}

fn quote_list_value(raw: &str) -> String {
    let reserved = |c: char| matches!(c, ',' | '(' | ')' | '"' | '\\' | ':' | '.') || c.is_whitespace();
    if raw.chars().any(reserved) {
        format!("\"{}\"", raw.replace('\\', "\\\\").replace('"', "\\\""))
    } else {
        raw.to_owned()
    }
}
