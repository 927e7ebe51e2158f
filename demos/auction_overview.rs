use anyhow::Result;
use tesouro::{BenchmarksQuery, Client, DealersQuery, Records, ResultadosQuery};
use tracing_subscriber::EnvFilter;

fn show(label: &str, records: &Records) {
    println!("{label}: {} record(s)", records.len());
    if let Some(first) = records.first() {
        println!("  first: {}", serde_json::Value::Object(first.clone()));
    }
}

fn main() -> Result<()> {
    // RUST_LOG=tesouro=debug shows each request.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let client = Client::new()?;
    let date = "16/07/2024";

    show("Benchmarks", &client.get_benchmarks(&BenchmarksQuery::default())?);
    show("Comunicados", &client.get_comunicados()?);
    show("Portarias", &client.get_portarias(Some(date))?);
    show("Resultados", &client.get_resultados(&ResultadosQuery::default())?);
    show("Dealers", &client.get_dealers(&DealersQuery::default())?);
    show("Calendario", &client.get_calendario()?);
    show("Homologacao", &client.get_homologacao(Some(date))?);
    show("Troca", &client.get_troca(Some(date))?);
    Ok(())
}
