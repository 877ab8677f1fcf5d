use super::ChainReader;
use crate::{
    abi::{erc20::IERC20, pancake_pair::IPancakePair},
    Balance,
};

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, BlockNumber},
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::types::eth::{BlockId, TransactionRequest},
    sol_types::SolCall,
};

use eyre::{Result, WrapErr};
use std::sync::Arc;
use tracing::instrument;

pub struct RpcChainReader<P: Provider> {
    inner: Arc<P>,
}

pub fn new_http_chain_reader(rpc_url: url::Url) -> RpcChainReader<DynProvider> {
    let inner = ProviderBuilder::new().connect_http(rpc_url).erased();

    RpcChainReader::new(Arc::new(inner))
}

impl<P: Provider + 'static> RpcChainReader<P> {
    pub fn new(inner: Arc<P>) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    async fn call<C: SolCall>(
        &self,
        to: Address,
        call: C,
        block_number: BlockNumber,
    ) -> Result<C::Return> {
        let tx = TransactionRequest::default()
            .with_to(to)
            .with_input(call.abi_encode());

        let output = self
            .inner
            .call(tx)
            .block(BlockId::number(block_number))
            .await
            .wrap_err_with(|| format!("{} call to {} failed", C::SIGNATURE, to))?;

        C::abi_decode_returns(&output)
            .wrap_err_with(|| format!("failed to abi decode {} from {}", C::SIGNATURE, to))
    }
}

impl<P: Provider + 'static> ChainReader for RpcChainReader<P> {
    #[instrument(skip(self))]
    async fn token0(&self, pool_address: Address, block_number: BlockNumber) -> Result<Address> {
        self.call(pool_address, IPancakePair::token0Call {}, block_number)
            .await
    }

    #[instrument(skip(self))]
    async fn token1(&self, pool_address: Address, block_number: BlockNumber) -> Result<Address> {
        self.call(pool_address, IPancakePair::token1Call {}, block_number)
            .await
    }

    #[instrument(skip(self))]
    async fn balance_of(
        &self,
        token_address: Address,
        holder_address: Address,
        block_number: BlockNumber,
    ) -> Result<Balance> {
        self.call(
            token_address,
            IERC20::balanceOfCall {
                account: holder_address,
            },
            block_number,
        )
        .await
    }
}
