//! Freighter wallet extension bindings.
//!
//! Bridges the `window.freighterApi` surface into the `WalletProvider`
//! trait. Every call may suspend on an extension prompt.

use async_trait::async_trait;
use el_api_types::Address;
use el_chain_client::{ChainError, WalletProvider};
use js_sys::{Object, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "freighterApi"], js_name = isConnected)]
    fn freighter_is_connected() -> Promise;

    #[wasm_bindgen(js_namespace = ["window", "freighterApi"], js_name = setAllowed)]
    fn freighter_set_allowed() -> Promise;

    #[wasm_bindgen(js_namespace = ["window", "freighterApi"], js_name = getAddress)]
    fn freighter_get_address() -> Promise;

    #[wasm_bindgen(js_namespace = ["window", "freighterApi"], js_name = signTransaction)]
    fn freighter_sign_transaction(envelope: &str, opts: &JsValue) -> Promise;
}

pub struct FreighterWallet;

async fn await_promise(promise: Promise, context: &str) -> Result<JsValue, ChainError> {
    JsFuture::from(promise)
        .await
        .map_err(|err| ChainError::Wallet(format!("{context}: {err:?}")))
}

fn bool_field(value: &JsValue, field: &str) -> bool {
    Reflect::get(value, &JsValue::from_str(field))
        .ok()
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}

fn string_field(value: &JsValue, field: &str) -> Option<String> {
    Reflect::get(value, &JsValue::from_str(field))
        .ok()
        .and_then(|v| v.as_string())
}

#[async_trait(?Send)]
impl WalletProvider for FreighterWallet {
    async fn is_connected(&self) -> Result<bool, ChainError> {
        let value = await_promise(freighter_is_connected(), "isConnected").await?;
        Ok(bool_field(&value, "isConnected"))
    }

    async fn set_allowed(&self) -> Result<bool, ChainError> {
        let value = await_promise(freighter_set_allowed(), "setAllowed").await?;
        Ok(bool_field(&value, "isAllowed"))
    }

    async fn get_address(&self) -> Result<Address, ChainError> {
        let value = await_promise(freighter_get_address(), "getAddress").await?;
        let address = string_field(&value, "address")
            .ok_or_else(|| ChainError::Wallet("getAddress returned no address".to_owned()))?;
        Ok(Address(address))
    }

    async fn sign_transaction(
        &self,
        envelope_b64: &str,
        network_passphrase: &str,
    ) -> Result<String, ChainError> {
        let opts = Object::new();
        Reflect::set(
            &opts,
            &JsValue::from_str("networkPassphrase"),
            &JsValue::from_str(network_passphrase),
        )
        .map_err(|err| ChainError::Wallet(format!("signTransaction opts: {err:?}")))?;

        let value = JsFuture::from(freighter_sign_transaction(envelope_b64, &opts))
            .await
            .map_err(|err| ChainError::SigningRejected(format!("{err:?}")))?;

        // The extension returns the signed envelope either directly as a
        // string or wrapped in an object, depending on version.
        if let Some(signed) = value.as_string() {
            return Ok(signed);
        }
        string_field(&value, "signedTxXdr")
            .ok_or_else(|| ChainError::SigningRejected("wallet returned no signed envelope".to_owned()))
    }
}
