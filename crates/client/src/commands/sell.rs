use std::sync::Arc;

use tokio::io::AsyncWriteExt;

use balcao_client::{Backend, ClientError, SalesPage, SelectOption};

use super::Context;

const HELP: &str = "\
Commands:
  list                    show the product catalog
  reload                  fetch the catalog again
  add <product> <qty>     add a line to the order
  remove <index>          remove a line by its current index
  show                    print the order
  html                    print the order as HTML table rows
  submit                  send the order
  help                    this text
  quit                    leave (the order is discarded)";

pub async fn run(ctx: &Context) -> anyhow::Result<()> {
    let session = ctx.session().await?;
    let backend: Arc<dyn Backend> = ctx.backend.clone();
    let page = SalesPage::open(backend, session)?;

    println!("Sales counter for {}.", page.session().display_name());

    let mut options = match page.load_catalog().await {
        Ok(options) => options,
        Err(err) => {
            report(&err);
            Vec::new()
        }
    };
    print_options(&options);
    println!("{HELP}");

    let mut stdout = tokio::io::stdout();

    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = ctx.console.read_line().await? else {
            break;
        };
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };

        match command {
            "list" => print_options(&options),
            "reload" => match page.load_catalog().await {
                Ok(fresh) => {
                    options = fresh;
                    print_options(&options);
                }
                Err(err) => report(&err),
            },
            "add" => {
                let product = words.next().unwrap_or("");
                let quantity = words.next().unwrap_or("");
                match page.add_item_from_form(product, quantity).await {
                    Ok(view) => print!("{}", view.to_text()),
                    Err(err) => report(&err),
                }
            }
            "remove" => {
                let Some(index) = words.next().and_then(|w| w.parse::<usize>().ok()) else {
                    println!("! usage: remove <index>");
                    continue;
                };
                match page.remove_item(index).await {
                    Ok(view) => print!("{}", view.to_text()),
                    Err(err) => report(&err),
                }
            }
            "show" => print!("{}", page.view().await.to_text()),
            "html" => {
                let view = page.view().await;
                println!("{}", view.rows_html());
                println!("<strong>{}</strong>", view.total);
            }
            "submit" => match page.submit().await {
                Ok((receipt, view)) => {
                    let sale = receipt.sale_id.map(|id| format!(" #{id}")).unwrap_or_default();
                    println!(
                        "{} Sale{sale}: {} item(s), total R$ {}.",
                        receipt.message.as_deref().unwrap_or("Sale registered."),
                        receipt.item_count,
                        receipt.total
                    );
                    print!("{}", view.to_text());
                }
                Err(err) => report(&err),
            },
            "help" => println!("{HELP}"),
            "quit" | "exit" => break,
            other => println!("! unknown command '{other}' (try 'help')"),
        }
    }

    Ok(())
}

fn print_options(options: &[SelectOption]) {
    let products: Vec<&SelectOption> = options.iter().filter(|o| !o.value.is_empty()).collect();
    if products.is_empty() {
        println!("  (no products loaded)");
        return;
    }
    for option in products {
        println!("  {:>5}  {}", option.value, option.label);
    }
}

fn report(err: &ClientError) {
    println!("! {}", err.user_message());
}
