//! `dns-lookup query`: submits a lookup to a running server and prints the
//! result the way the web page shows it.

use anyhow::{anyhow, bail};
use dns_lookup_application::use_cases::SubmitLookupUseCase;
use dns_lookup_domain::presets::CUSTOM_NAMESERVER;
use dns_lookup_domain::{DnsRecord, LookupForm, QueryInfo, Transport, RESOLVER_PRESETS};
use dns_lookup_infrastructure::http::HttpLookupClient;
use std::sync::Arc;
use std::time::Duration;

const TTL_PLACEHOLDER: &str = "-";
const HEADERS: [&str; 4] = ["TYPE", "NAME", "CONTENT", "TTL"];

pub struct QueryOptions {
    pub domain: String,
    pub nameserver: String,
    pub record_types: Vec<String>,
    pub dnssec: bool,
    pub transport: Transport,
    pub server: String,
    pub raw: bool,
    pub timeout: Duration,
}

pub async fn run_query(options: QueryOptions) -> anyhow::Result<()> {
    let form = build_form(&options)?;

    let client = HttpLookupClient::new(&options.server, options.timeout)?;
    let submit = SubmitLookupUseCase::new(Arc::new(client));

    if !form.can_submit(submit.is_loading().await) {
        bail!("Enter a domain containing '.' and at least one record type");
    }
    let request = form
        .submission()
        .ok_or_else(|| anyhow!("A nameserver is required"))?;

    if submit.execute(request).await.is_err() {
        // The notification is handed out once; fall back if it was consumed.
        let message = submit
            .take_notification()
            .await
            .unwrap_or_else(|| "DNS lookup failed".to_string());
        bail!(message);
    }

    let state = submit.state().await;
    println!("{}", render_summary(state.query_info()));
    println!();
    print!("{}", render_table(state.results().unwrap_or_default()));

    if options.raw {
        let raw = state.raw_data().unwrap_or_default();
        println!();
        println!("{}", serde_json::to_string_pretty(raw)?);
    }

    Ok(())
}

/// Mirrors what a user would click through in the lookup form.
fn build_form(options: &QueryOptions) -> anyhow::Result<LookupForm> {
    let mut form = LookupForm::new();
    form.set_domain(options.domain.trim());

    let is_preset = RESOLVER_PRESETS
        .iter()
        .any(|preset| preset.value == options.nameserver && preset.value != CUSTOM_NAMESERVER);
    if is_preset {
        form.select_nameserver(options.nameserver.as_str());
    } else {
        form.select_nameserver(CUSTOM_NAMESERVER);
        form.set_custom_nameserver(options.nameserver.trim());
    }

    if !options.record_types.is_empty() {
        form.set_record_types(&options.record_types);
    }
    form.set_dnssec(options.dnssec);

    if !form.select_transport(options.transport) {
        bail!("DoH is not available for authoritative lookups");
    }

    Ok(form)
}

fn render_summary(info: &QueryInfo) -> String {
    format!(
        ";; server: {}  time: {} ms  transport: {}  dnssec: {}",
        info.server.as_deref().unwrap_or("?"),
        info.time.map_or_else(|| "?".to_string(), |t| t.to_string()),
        info.transport.map_or("?", |t| t.as_str()),
        if info.dnssec.unwrap_or(false) { "on" } else { "off" },
    )
}

pub fn render_table(records: &[DnsRecord]) -> String {
    if records.is_empty() {
        return "No records found\n".to_string();
    }

    let rows: Vec<[String; 4]> = records
        .iter()
        .map(|record| {
            [
                record.record_type.clone(),
                record.name.clone(),
                record.content.clone(),
                record
                    .ttl
                    .map_or_else(|| TTL_PLACEHOLDER.to_string(), |ttl| ttl.to_string()),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&format_row(&HEADERS.map(String::from), &widths));
    for row in &rows {
        out.push_str(&format_row(row, &widths));
    }
    out
}

fn format_row(cells: &[String; 4], widths: &[usize; 4]) -> String {
    format!(
        "{:<w0$}  {:<w1$}  {:<w2$}  {:>w3$}\n",
        cells[0],
        cells[1],
        cells[2],
        cells[3],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
        w3 = widths[3],
    )
}
