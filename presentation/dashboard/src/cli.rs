use clap::{Parser, Subcommand, ValueEnum};

use business::domain::purchase::use_cases::get_detail::GetPurchaseDetailParams;
use business::domain::purchase::value_objects::StatusFilter;

use crate::setup::dependency_injection::DependencyContainer;
use crate::view::error_mapper::{catalog_error_message, purchase_error_message};
use crate::view::{catalog_view, detail_view, purchase_view};

#[derive(Debug, Parser)]
#[command(name = "dashboard", about = "Painel do mercadinho", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Lista os produtos disponíveis no mercado
    Mercado,
    /// Lista o histórico de compras do usuário
    Compras {
        /// Filtro de status
        #[arg(long, value_enum, default_value_t = FilterArg::Todos)]
        filtro: FilterArg,
    },
    /// Mostra os detalhes de uma compra
    Compra {
        /// Identificador da compra
        id: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterArg {
    Todos,
    Pendente,
    Concluida,
    Cancelada,
}

impl From<FilterArg> for StatusFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::Todos => StatusFilter::All,
            FilterArg::Pendente => StatusFilter::Pending,
            FilterArg::Concluida => StatusFilter::Completed,
            FilterArg::Cancelada => StatusFilter::Canceled,
        }
    }
}

pub async fn run(cli: Cli, container: DependencyContainer) -> anyhow::Result<()> {
    match cli.command {
        Commands::Mercado => {
            let view = container
                .browse_catalog
                .execute()
                .await
                .map_err(|e| anyhow::anyhow!(catalog_error_message(&e)))?;
            println!("Mercado");
            println!("{}", catalog_view::render(&view));
        }
        Commands::Compras { filtro } => {
            let purchases = container
                .get_history
                .execute()
                .await
                .map_err(|e| anyhow::anyhow!(purchase_error_message(&e)))?;
            println!("Compras");
            println!("{}", purchase_view::render(&purchases, filtro.into()));
        }
        Commands::Compra { id } => {
            let view = container
                .get_detail
                .execute(GetPurchaseDetailParams { id })
                .await
                .map_err(|e| anyhow::anyhow!(purchase_error_message(&e)))?;
            println!("Detalhes da Compra");
            println!("{}", detail_view::render(&view));
        }
    }

    Ok(())
}
