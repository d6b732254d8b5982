use tower_stats_core::schema;

fn render_table() -> String {
    let width = schema::fields()
        .iter()
        .map(|f| f.label.len())
        .max()
        .unwrap_or(0);

    schema::fields()
        .iter()
        .map(|f| format!("{:<width$}  {:<30}  {}", f.label, f.name, f.kind, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_json() -> serde_json::Value {
    schema::fields()
        .iter()
        .map(|f| {
            serde_json::json!({
                "label": f.label,
                "name": f.name,
                "kind": f.kind,
            })
        })
        .collect()
}

pub fn run(json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&render_json())?);
    } else {
        println!("{}", render_table());
    }
    Ok(())
}
