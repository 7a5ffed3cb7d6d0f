//! Terminal front end over [`Console`]

use crate::app::Console;
use crate::domain::a001_category;
use crate::domain::a002_product::list as products;
use crate::domain::a003_sale::list as sales;
use crate::domain::a004_store_config;
use crate::shared::api_utils::HttpTransport;
use crate::shared::config::Config;
use crate::shared::date_utils::{format_date, format_datetime, DatePreset};
use crate::shared::list::{AggregateSnapshot, FilterValue, Page};
use crate::shared::number_format::{format_money, format_number_int};
use crate::usecases::u501_postal_code_lookup;
use crate::usecases::u502_generate_report::{self as reports, builder, ReportFilterBuilder};
use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use contracts::domain::a003_sale::SaleDto;
use contracts::domain::a004_store_config::StoreConfig;
use contracts::usecases::u502_generate_report::ReportKind;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Storefront management console", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: config.toml next to the executable)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Also append logs to target/logs/console.log
    #[arg(long, global = true)]
    pub log_file: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List products")]
    Products {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        category: Option<i64>,
        #[arg(long)]
        low_stock: bool,
        /// Include inactive products
        #[arg(long)]
        all: bool,
        #[arg(long, default_value = "1")]
        page: usize,
        #[arg(long)]
        page_size: Option<usize>,
    },

    #[command(about = "List sales")]
    Sales {
        #[arg(long)]
        product: Option<i64>,
        #[arg(long)]
        category: Option<i64>,
        /// YYYY-MM-DD
        #[arg(long)]
        from: Option<String>,
        /// YYYY-MM-DD
        #[arg(long)]
        to: Option<String>,
        #[arg(long, default_value = "1")]
        page: usize,
        #[arg(long)]
        page_size: Option<usize>,
    },

    #[command(about = "Record a sale")]
    SaleNew {
        #[arg(long)]
        product: i64,
        #[arg(long)]
        quantity: u32,
        /// Unit price; the product's current price when omitted
        #[arg(long)]
        price: Option<f64>,
        #[arg(long)]
        note: Option<String>,
    },

    #[command(about = "List categories")]
    Categories {
        /// Include inactive categories
        #[arg(long)]
        all: bool,
    },

    #[command(about = "Show dashboard numbers")]
    Stats {
        #[arg(long, default_value = "30")]
        days: u32,
        #[arg(long, default_value = "10")]
        limit: u32,
    },

    #[command(about = "Generate PDF reports")]
    Report {
        #[command(subcommand)]
        command: ReportCommand,
    },

    #[command(about = "Show or change the store configuration")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    #[command(about = "Look up an address by CEP")]
    Cep { code: String },
}

#[derive(Subcommand)]
pub enum ReportCommand {
    #[command(about = "List reports offered by the store")]
    List,

    #[command(about = "Sales report")]
    Sales {
        #[arg(long, conflicts_with = "preset")]
        from: Option<String>,
        #[arg(long, conflicts_with = "preset")]
        to: Option<String>,
        #[arg(long)]
        preset: Option<Preset>,
        #[arg(long)]
        category: Option<i64>,
        #[arg(long)]
        product: Option<i64>,
        /// Output directory
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },

    #[command(about = "Stock report")]
    Stock {
        #[arg(long)]
        low_stock: bool,
        #[arg(long)]
        category: Option<i64>,
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    Show,
    /// Set fields, e.g. `config set nome_empresa="Loja" cep=01310100`
    Set {
        #[arg(required = true)]
        assignments: Vec<String>,
        /// Fill address fields from the CEP before saving
        #[arg(long)]
        lookup_cep: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Preset {
    Today,
    #[value(name = "7d")]
    Last7Days,
    #[value(name = "30d")]
    Last30Days,
}

impl From<Preset> for DatePreset {
    fn from(p: Preset) -> Self {
        match p {
            Preset::Today => DatePreset::Today,
            Preset::Last7Days => DatePreset::Last7Days,
            Preset::Last30Days => DatePreset::Last30Days,
        }
    }
}

pub async fn run(command: Commands, config: &Config) -> anyhow::Result<()> {
    let mut config = config.clone();
    match &command {
        Commands::Products {
            page_size: Some(size),
            ..
        } => config.lists.products_page_size = *size,
        Commands::Sales {
            page_size: Some(size),
            ..
        } => config.lists.sales_page_size = *size,
        _ => {}
    }
    if config.lists.products_page_size == 0 || config.lists.sales_page_size == 0 {
        anyhow::bail!("page size must be greater than zero");
    }
    let console = Console::from_config(&config)?;

    match command {
        Commands::Products {
            search,
            category,
            low_stock,
            all,
            page,
            page_size: _,
        } => {
            let list = &console.products;
            list.set_filters(&[
                (products::SEARCH, FilterValue::Text(search.unwrap_or_default())),
                (products::CATEGORY, FilterValue::Reference(category)),
                (products::LOW_STOCK, FilterValue::Flag(low_stock)),
                (products::ACTIVE, FilterValue::Flag(!all)),
            ])
            .await?;
            if page > 1 {
                list.set_page(page).await?;
            }
            print_products(&list.current_page(), &list.current_aggregates());
        }

        Commands::Sales {
            product,
            category,
            from,
            to,
            page,
            page_size: _,
        } => {
            let list = &console.sales;
            list.set_filters(&[
                (sales::PRODUCT, FilterValue::Reference(product)),
                (sales::CATEGORY, FilterValue::Reference(category)),
                (sales::DATE_FROM, FilterValue::Date(from.unwrap_or_default())),
                (sales::DATE_TO, FilterValue::Date(to.unwrap_or_default())),
            ])
            .await?;
            if page > 1 {
                list.set_page(page).await?;
            }
            print_sales(&list.current_page(), &list.current_aggregates());
        }

        Commands::SaleNew {
            product,
            quantity,
            price,
            note,
        } => {
            let dto = SaleDto {
                produto: product,
                quantidade: quantity,
                preco_unitario: price,
                observacoes: note,
            };
            let sale = console.record_sale(&dto).await?;
            println!(
                "Venda #{} registrada: {} x {} = {}",
                sale.id,
                sale.quantidade,
                sale.produto_nome.as_deref().unwrap_or("-"),
                format_money(sale.valor_total)
            );
        }

        Commands::Categories { all } => {
            let categories = a001_category::api::fetch_all(console.transport(), !all).await?;
            for c in &categories {
                println!(
                    "{:>5}  {:<30} {:>4} produtos{}",
                    c.id,
                    c.nome,
                    c.produtos_count,
                    if c.ativo { "" } else { "  (inativa)" }
                );
            }
            println!("{} categorias", categories.len());
        }

        Commands::Stats { days, limit } => {
            let dashboard = &console.dashboard;
            dashboard.load(days, limit).await?;
            let snapshot = dashboard
                .snapshot()
                .context("dashboard returned no data")?;
            let s = &snapshot.stats;
            println!("Produtos: {} ({} ativos, {} com estoque baixo)", s.total_produtos, s.produtos_ativos, s.produtos_estoque_baixo);
            println!("Vendas hoje: {} em {} vendas", format_money(s.total_vendas_hoje), s.quantidade_vendas_hoje);
            println!("Vendas no mês: {} em {} vendas", format_money(s.total_vendas_mes), s.quantidade_vendas_mes);
            println!("Mais vendido: {}", s.produto_mais_vendido.as_deref().unwrap_or("-"));
            println!("Categoria líder: {}", s.categoria_mais_vendida.as_deref().unwrap_or("-"));
            println!();
            println!("Vendas por dia ({} dias):", days);
            for d in &snapshot.daily_sales {
                println!("  {}  {:>14}  {:>4}", format_date(&d.data), format_money(d.total_vendas), d.quantidade_vendas);
            }
            println!("Top produtos:");
            for p in &snapshot.top_products {
                println!("  {:<30} {:>5} un  {:>14}", p.nome, p.total_vendido, format_money(p.valor_total));
            }
            println!("Por categoria:");
            for c in &snapshot.by_category {
                println!("  {:<30} {:>5} un  {:>14}", c.categoria, c.quantidade_vendida, format_money(c.total_vendas));
            }
        }

        Commands::Report { command } => run_report(&console, command).await?,

        Commands::Config { command } => match command {
            ConfigCommand::Show => {
                let store = a004_store_config::api::fetch(console.transport()).await?;
                print_store_config(&store);
            }
            ConfigCommand::Set {
                assignments,
                lookup_cep,
            } => {
                let current = a004_store_config::api::fetch(console.transport()).await?;
                let mut updated = apply_assignments(&current, &assignments)?;
                if lookup_cep {
                    let address =
                        u501_postal_code_lookup::lookup(console.transport(), &updated.cep).await?;
                    updated.apply_address(&address);
                }
                let saved = a004_store_config::api::save(console.transport(), &updated).await?;
                println!("Configurações salvas.");
                print_store_config(&saved);
            }
        },

        Commands::Cep { code } => {
            let a = u501_postal_code_lookup::lookup(console.transport(), &code).await?;
            println!("{}", a.cep);
            println!("{}", a.endereco);
            if let Some(c) = a.complemento.as_deref().filter(|c| !c.is_empty()) {
                println!("{}", c);
            }
            println!("{} - {}/{}", a.bairro, a.cidade, a.uf);
        }
    }
    Ok(())
}

async fn run_report(console: &Console<HttpTransport>, command: ReportCommand) -> anyhow::Result<()> {
    let api = console.transport();
    let (filters, out) = match command {
        ReportCommand::List => {
            for r in reports::fetch_available(api).await? {
                println!("{:<10} {:<30} {}", r.tipo, r.nome, r.descricao);
            }
            return Ok(());
        }
        ReportCommand::Sales {
            from,
            to,
            preset,
            category,
            product,
            out,
        } => {
            let mut filters = ReportFilterBuilder::new(ReportKind::Sales);
            if let Some(p) = preset {
                filters.preset(p.into())?;
            }
            match (from.as_deref().map(parse_date), to.as_deref().map(parse_date)) {
                (Some(from), Some(to)) => {
                    filters.date_range(from?, to?)?;
                }
                (from, to) => {
                    if let Some(from) = from {
                        filters.set(builder::DATE_FROM, FilterValue::Date(from?.to_string()))?;
                    }
                    if let Some(to) = to {
                        filters.set(builder::DATE_TO, FilterValue::Date(to?.to_string()))?;
                    }
                }
            }
            filters
                .set(builder::CATEGORY, FilterValue::Reference(category))?
                .set(builder::PRODUCT, FilterValue::Reference(product))?;
            (filters, out)
        }
        ReportCommand::Stock {
            low_stock,
            category,
            out,
        } => {
            let mut filters = ReportFilterBuilder::new(ReportKind::Stock);
            filters
                .set(builder::LOW_STOCK_ONLY, FilterValue::Flag(low_stock))?
                .set(builder::CATEGORY, FilterValue::Reference(category))?;
            (filters, out)
        }
    };

    let report = reports::generate(api, &filters).await?;
    let path = write_report(&out, &report.filename, &report.bytes).await?;
    println!("Relatório salvo em {}", path.display());
    Ok(())
}

fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("'{}' is not a YYYY-MM-DD date", s))
}

async fn write_report(dir: &Path, filename: &str, bytes: &[u8]) -> anyhow::Result<PathBuf> {
    // Имя приходит от сервера, каталоги из него не принимаем
    let name = Path::new(filename)
        .file_name()
        .context("report has no usable file name")?;
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(name);
    tokio::fs::write(&path, bytes)
        .await
        .with_context(|| format!("cannot write {}", path.display()))?;
    Ok(path)
}

/// `campo=valor` pairs applied over the current configuration
fn apply_assignments(current: &StoreConfig, assignments: &[String]) -> anyhow::Result<StoreConfig> {
    let mut value = serde_json::to_value(current)?;
    let fields = value
        .as_object_mut()
        .context("store configuration is not an object")?;
    for assignment in assignments {
        let (key, val) = assignment
            .split_once('=')
            .with_context(|| format!("expected campo=valor, got '{}'", assignment))?;
        let key = key.trim();
        if key == "atualizado_em" || !fields.contains_key(key) {
            anyhow::bail!("unknown store configuration field '{}'", key);
        }
        fields.insert(key.to_string(), serde_json::Value::String(val.trim().to_string()));
    }
    Ok(serde_json::from_value(value)?)
}

fn print_products(page: &Page<contracts::domain::a002_product::Product>, totals: &AggregateSnapshot) {
    for p in &page.items {
        println!(
            "{:>5}  {:<30} {:<16} {:>14} {:>6}  {}",
            p.id,
            p.nome,
            p.categoria_nome.as_deref().unwrap_or("-"),
            format_money(p.preco),
            p.estoque,
            p.stock_status().label()
        );
    }
    println!(
        "Página {}/{} · {} produtos · {} em estoque · {} unidades",
        page.page_number,
        page.total_pages(),
        page.total_count,
        format_money(totals.total_value),
        format_number_int(totals.total_units)
    );
}

fn print_sales(page: &Page<contracts::domain::a003_sale::Sale>, totals: &AggregateSnapshot) {
    for s in &page.items {
        println!(
            "{:>5}  {:<16} {:<30} {:>4} x {:>12} = {:>14}",
            s.id,
            s.data_venda.as_deref().map(format_datetime).unwrap_or_default(),
            s.produto_nome.as_deref().unwrap_or("-"),
            s.quantidade,
            format_money(s.preco_unitario),
            format_money(s.valor_total)
        );
    }
    println!(
        "Página {}/{} · {} vendas · total {} · {} itens · ticket médio {}",
        page.page_number,
        page.total_pages(),
        page.total_count,
        format_money(totals.total_value),
        format_number_int(totals.total_units),
        format_money(totals.per_unit_average)
    );
}

fn print_store_config(c: &StoreConfig) {
    println!("{}", c.nome_empresa);
    if !c.cnpj.is_empty() {
        println!("CNPJ {}", c.cnpj);
    }
    println!("{}, {} {}", c.endereco, c.numero, c.complemento);
    println!("{} - {}/{}  CEP {}", c.bairro, c.cidade, c.uf, c.cep);
    if !c.telefone.is_empty() || !c.email.is_empty() {
        println!("{}  {}", c.telefone, c.email);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_report_preset() {
        let cli = Cli::try_parse_from(["storefront", "report", "sales", "--preset", "7d"]).unwrap();
        match cli.command {
            Commands::Report {
                command: ReportCommand::Sales { preset, .. },
            } => assert!(matches!(preset, Some(Preset::Last7Days))),
            _ => panic!("wrong command"),
        }
    }

    #[test]
    fn test_apply_assignments() {
        let current = StoreConfig {
            nome_empresa: "Loja".into(),
            ..Default::default()
        };
        let updated = apply_assignments(
            &current,
            &["cidade=Campinas".to_string(), "uf = sp".to_string()],
        )
        .unwrap();
        assert_eq!(updated.cidade, "Campinas");
        assert_eq!(updated.uf, "sp");
        assert_eq!(updated.nome_empresa, "Loja");

        assert!(apply_assignments(&current, &["senha=x".to_string()]).is_err());
        assert!(apply_assignments(&current, &["cidade".to_string()]).is_err());
    }

    #[tokio::test]
    async fn test_write_report_strips_directories() {
        let dir = std::env::temp_dir().join("storefront-report-test");
        let path = write_report(&dir, "../../etc/relatorio.pdf", b"%PDF")
            .await
            .unwrap();
        assert_eq!(path, dir.join("relatorio.pdf"));
        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF");
        let _ = std::fs::remove_file(path);
    }
}
