use anyhow::{anyhow, bail, Context, Result};
use colored::*;
use reqwest::{Client, Method, StatusCode};
use serde_json::{json, Value};

/// Recorre el ciclo completo categoria -> tarjeta contra un servidor vivo.
#[tokio::main]
async fn main() -> Result<()> {
    let base_url = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("API_BASE_URL").ok())
        .unwrap_or_else(|| "http://localhost:3000".to_string());
    let base_url = base_url.trim_end_matches('/').to_string();

    println!("{}", "🃏 Tarjetas API Testing Tool".bright_blue().bold());
    println!("{}", "=====================================".bright_blue());
    println!("🌐 {}", base_url);
    println!();

    let client = Client::new();
    let api = Api { client: &client, base_url: &base_url };

    let alive = client.get(format!("{}/", base_url)).send().await?.text().await?;
    step("GET /", &alive);

    let (status, body) = api
        .call(Method::POST, "/categoria", Some(json!({ "nombre": "Electronics" })))
        .await?;
    expect(status, StatusCode::OK, "POST /categoria", &body)?;
    let categoria_id = inserted_id(&body)?;

    let (status, body) = api.call(Method::GET, "/categoria", None).await?;
    expect(status, StatusCode::OK, "GET /categoria", &body)?;
    if !rows(&body).iter().any(|row| row["id"] == categoria_id && row["nombre"] == "Electronics") {
        bail!("la categoria {} no aparece en el listado", categoria_id);
    }

    let mut tarjeta = json!({
        "title": "Phone",
        "value": 100,
        "description": "d",
        "images": "[]",
        "categoria_id": categoria_id
    });
    let (status, body) = api.call(Method::POST, "/tarjeta", Some(tarjeta.clone())).await?;
    expect(status, StatusCode::OK, "POST /tarjeta", &body)?;
    let tarj_id = inserted_id(&body)?;

    let (status, body) = api.call(Method::GET, "/tarjeta", None).await?;
    expect(status, StatusCode::OK, "GET /tarjeta", &body)?;
    let row = find_tarjeta(&body, tarj_id).ok_or_else(|| anyhow!("tarjeta {} no listada", tarj_id))?;
    if row["categoria_nombre"] != "Electronics" {
        bail!("categoria_nombre inesperado: {}", row["categoria_nombre"]);
    }

    tarjeta["title"] = json!("Phone X");
    let path = format!("/tarjeta/{}", tarj_id);
    let (status, body) = api.call(Method::PUT, &path, Some(tarjeta)).await?;
    expect(status, StatusCode::OK, "PUT /tarjeta/:tarj_id", &body)?;

    let (_, body) = api.call(Method::GET, "/tarjeta", None).await?;
    match find_tarjeta(&body, tarj_id) {
        Some(row) if row["title"] == "Phone X" => step("título actualizado", "Phone X"),
        _ => bail!("la tarjeta {} no refleja la actualización", tarj_id),
    }

    let (status, body) = api.call(Method::DELETE, &path, None).await?;
    expect(status, StatusCode::OK, "DELETE /tarjeta/:tarj_id", &body)?;

    let (status, body) = api.call(Method::DELETE, &path, None).await?;
    expect(status, StatusCode::NOT_FOUND, "DELETE /tarjeta/:tarj_id (otra vez)", &body)?;

    let cleanup = format!("/categoria/{}", categoria_id);
    let (status, body) = api.call(Method::DELETE, &cleanup, None).await?;
    expect(status, StatusCode::OK, "DELETE /categoria/:id", &body)?;

    println!();
    println!("{}", "✅ Escenario completo".bright_green().bold());
    Ok(())
}

struct Api<'a> {
    client: &'a Client,
    base_url: &'a str,
}

impl Api<'_> {
    async fn call(&self, method: Method, path: &str, body: Option<Value>) -> Result<(StatusCode, Value)> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.request(method.clone(), &url);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("{} {} no respondió", method, url))?;
        let status = response.status();
        let value = response.json::<Value>().await.unwrap_or(Value::Null);
        Ok((status, value))
    }
}

fn step(label: &str, detail: &str) {
    println!("{} {} {}", "✔".bright_green(), label.bright_cyan(), detail);
}

fn expect(actual: StatusCode, expected: StatusCode, label: &str, body: &Value) -> Result<()> {
    if actual != expected {
        println!("{} {} -> {}", "✘".bright_red(), label.bright_cyan(), body);
        bail!("{}: esperado {}, recibido {}", label, expected, actual);
    }
    step(label, &actual.to_string());
    Ok(())
}

fn inserted_id(body: &Value) -> Result<i64> {
    body["usuario"]["lastInsertRowid"]
        .as_i64()
        .ok_or_else(|| anyhow!("respuesta sin lastInsertRowid: {}", body))
}

fn rows(body: &Value) -> &[Value] {
    body.as_array().map(Vec::as_slice).unwrap_or(&[])
}

fn find_tarjeta(body: &Value, tarj_id: i64) -> Option<&Value> {
    rows(body).iter().find(|row| row["tarj_id"] == tarj_id)
}
