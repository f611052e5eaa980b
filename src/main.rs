use anyhow::{bail, Context, Result};
use serde::Serialize;
use serde_json::{json, Value};

use sous::api::{ApiClient, Backend};
use sous::fixtures::{self, FixtureSource};
use sous::logging::{log, obj, v_str, Domain, Level};
use sous::routes::resolve;
use sous::session::{Session, User};
use sous::state::Config;
use sous::views::{AutomationDemo, ChatDemo};

const USAGE: &str = "usage: sous <command>
  fixtures <kind> [count]   kinds: transactions inventory suppliers orders pricing revenue
                                   briefing pars matrix plugins
  summary                   GET  dashboard/summary
  ingest                    POST ingest
  chat <message>            POST agent/chat through the chat demo
  simulate-sale             ingest, then refresh the automation demo
  route <path> [--signed-in]";

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn parse_count(raw: Option<&String>, default: usize) -> Result<usize> {
    match raw {
        Some(s) => s
            .parse()
            .with_context(|| format!("count must be a non-negative integer, got {:?}", s)),
        None => Ok(default),
    }
}

fn fixture_json(kind: &str, count: Option<&String>, src: &mut FixtureSource) -> Result<Value> {
    let value = match kind {
        "transactions" => json!(fixtures::generate_transactions(src, parse_count(count, 20)?)),
        "inventory" => json!(fixtures::generate_inventory(src, parse_count(count, 12)?)),
        "suppliers" => json!(fixtures::generate_suppliers(src, parse_count(count, 4)?)),
        "orders" => json!(fixtures::generate_supplier_orders(src, parse_count(count, 10)?)),
        "pricing" => json!(fixtures::generate_pricing_history(src, parse_count(count, 3)?)),
        "revenue" => json!(fixtures::generate_revenue_data(src, parse_count(count, 7)?)),
        "briefing" => json!(fixtures::generate_daily_briefing()),
        "pars" => json!(fixtures::generate_smart_pars()),
        "matrix" => json!(fixtures::generate_menu_matrix()),
        "plugins" => json!(fixtures::generate_plugins()),
        other => bail!("unknown fixture kind: {}\n{}", other, USAGE),
    };
    Ok(value)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(cmd) = args.first() else {
        eprintln!("{}", USAGE);
        std::process::exit(2);
    };
    log(
        Level::Info,
        Domain::System,
        "start",
        obj(&[("op", v_str(cmd)), ("api_base", v_str(&cfg.api_base))]),
    );

    match cmd.as_str() {
        "fixtures" => {
            let kind = args.get(1).context("fixtures needs a kind")?;
            let mut src = FixtureSource::new(cfg.seed());
            print_json(&fixture_json(kind, args.get(2), &mut src)?)?;
        }
        "summary" => {
            let client = ApiClient::from_config(&cfg)?;
            print_json(&client.dashboard_summary().await?)?;
        }
        "ingest" => {
            let client = ApiClient::from_config(&cfg)?;
            print_json(&client.ingest().await?)?;
        }
        "chat" => {
            let message = args[1..].join(" ");
            let client = ApiClient::from_config(&cfg)?;
            let mut chat = ChatDemo::new();
            chat.set_input(&message);
            chat.send(&client).await;
            print_json(&chat.messages())?;
        }
        "simulate-sale" => {
            let client = ApiClient::from_config(&cfg)?;
            let mut demo = AutomationDemo::new();
            demo.load(&client).await;
            demo.simulate_sale(&client).await;
            print_json(&json!({
                "stats": demo.stats(),
                "revenue": demo.revenue_label(),
                "top_item": demo.top_item_label(),
                "avg_order_value": demo.avg_order_value_label(),
                "stock_alerts": demo.stock_alert_badge(),
                "analysis": demo.analysis_line(),
            }))?;
        }
        "route" => {
            let path = args.get(1).context("route needs a path")?;
            let session = if args.iter().any(|a| a == "--signed-in") {
                Session::Authenticated(User {
                    id: "cli".into(),
                    display_name: "Demo".into(),
                    email: "demo@example.com".into(),
                })
            } else {
                Session::Anonymous
            };
            print_json(&resolve(path, &session))?;
        }
        other => bail!("unknown command: {}\n{}", other, USAGE),
    }
    Ok(())
}
