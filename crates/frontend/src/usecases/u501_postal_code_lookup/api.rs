use crate::shared::api_utils::{get, ApiTransport};
use crate::shared::error::{ConsoleError, ConsoleResult};
use contracts::domain::a004_store_config::{Address, PostalCode};

/// Поиск адреса по CEP. Маска во входной строке допускается.
pub async fn lookup<A>(api: &A, input: &str) -> ConsoleResult<Address>
where
    A: ApiTransport + ?Sized,
{
    let cep = PostalCode::parse(input).map_err(ConsoleError::Validation)?;
    let mut address: Address = get(api, &format!("/cep/{}/", cep.digits()), "").await?;
    if !address.success {
        return Err(ConsoleError::NotFound(format!("CEP {} não encontrado", cep)));
    }
    if address.cep.is_empty() {
        address.cep = cep.formatted();
    }
    tracing::info!("CEP {}: {}, {}/{}", cep, address.endereco, address.cidade, address.uf);
    Ok(address)
}
