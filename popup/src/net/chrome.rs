//! `chrome.scripting`-backed storage accessor and clipboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The popup never touches the page's `localStorage` itself. Every call
//! resolves the active tab, injects one of three fixed functions into it with
//! `chrome.scripting.executeScript`, and reads back the function's result.
//!
//! DESIGN
//! ======
//! Arguments and results cross the JS boundary as JSON text. The injected
//! functions live in a static table in the bundled JS glue, so the extension
//! never evaluates generated code.
//!
//! ERROR HANDLING
//! ==============
//! Any rejection from the extension APIs (restricted `chrome://` pages, closed
//! tabs, missing permissions) becomes [`StorageError::Access`]. Per-key write
//! refusals come back as [`KeyFailure`]s instead of failing the whole call.

#[cfg(test)]
#[path = "chrome_test.rs"]
mod chrome_test;

use async_trait::async_trait;
use inspector::{Clipboard, KeyFailure, PageId, RawEntry, StorageAccessor, StorageError};

#[cfg(not(feature = "csr"))]
const NOT_IN_BROWSER: &str = "storage is only reachable from the extension popup";

/// Accessor for the focused tab of the current window.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChromeAccessor;

/// Clipboard backed by `navigator.clipboard`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClipboard;

/// Build the page id for a tab, or fail when there is no usable active tab.
pub fn page_for_tab(tab_id: Option<f64>) -> Result<PageId, StorageError> {
    match tab_id {
        Some(id) if id.is_finite() && id >= 0.0 && id.fract() == 0.0 => {
            Ok(PageId::new(format!("{id:.0}")))
        }
        Some(id) => Err(StorageError::access(format!("unusable tab id {id}"))),
        None => Err(StorageError::access("no active tab")),
    }
}

/// Tab id to pass back to `chrome.scripting`.
pub fn tab_for_page(page: &PageId) -> Result<f64, StorageError> {
    page.as_str()
        .parse::<f64>()
        .map_err(|_| StorageError::access(format!("unusable tab id {page}")))
}

/// Parse the `[[key, value], ...]` payload produced by the page's read.
pub fn parse_entries(payload: Option<&str>) -> Result<Vec<RawEntry>, StorageError> {
    let payload = payload.ok_or_else(|| StorageError::access("page returned no storage"))?;
    serde_json::from_str(payload)
        .map_err(|err| StorageError::access(format!("unreadable storage payload: {err}")))
}

/// Parse the `[{key, reason}, ...]` payload produced by the page's write.
pub fn parse_failures(payload: Option<&str>) -> Result<Vec<KeyFailure>, StorageError> {
    let payload = payload.ok_or_else(|| StorageError::access("page returned no write result"))?;
    serde_json::from_str(payload)
        .map_err(|err| StorageError::access(format!("unreadable write result: {err}")))
}

/// Serialize entries as the JSON argument for the page's write.
pub fn entries_argument(entries: &[RawEntry]) -> Result<String, StorageError> {
    serde_json::to_string(entries)
        .map_err(|err| StorageError::access(format!("cannot serialize entries: {err}")))
}

#[cfg(feature = "csr")]
mod bindings {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen(inline_js = r#"
const PAGE_SCRIPTS = {
  readAll: () => {
    const out = [];
    for (let i = 0; i < localStorage.length; i++) {
      const key = localStorage.key(i);
      out.push([key, localStorage.getItem(key)]);
    }
    return JSON.stringify(out);
  },
  writeMany: (entriesJson, clearFirst) => {
    const entries = JSON.parse(entriesJson);
    if (clearFirst) {
      localStorage.clear();
    }
    const failed = [];
    for (const [key, value] of entries) {
      try {
        localStorage.setItem(key, value);
      } catch (e) {
        failed.push({ key, reason: String((e && e.name) || e) });
      }
    }
    return JSON.stringify(failed);
  },
  removeOne: (key) => {
    localStorage.removeItem(key);
    return "null";
  },
};

export async function activeTabId() {
  const [tab] = await chrome.tabs.query({ active: true, currentWindow: true });
  return tab && tab.id !== undefined ? tab.id : null;
}

export async function runInTab(tabId, script, args) {
  const results = await chrome.scripting.executeScript({
    target: { tabId },
    func: PAGE_SCRIPTS[script],
    args,
  });
  if (!results || !results[0]) {
    throw new Error("script produced no result");
  }
  return results[0].result;
}

export async function writeClipboard(text) {
  await navigator.clipboard.writeText(text);
}
"#)]
    extern "C" {
        #[wasm_bindgen(js_name = activeTabId, catch)]
        pub async fn active_tab_id() -> Result<JsValue, JsValue>;

        #[wasm_bindgen(js_name = runInTab, catch)]
        pub async fn run_in_tab(
            tab_id: f64,
            script: &str,
            args: js_sys::Array,
        ) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(js_name = writeClipboard, catch)]
        pub async fn write_clipboard(text: &str) -> Result<JsValue, JsValue>;
    }
}

#[cfg(feature = "csr")]
fn js_error(err: &wasm_bindgen::JsValue) -> StorageError {
    use wasm_bindgen::JsCast;

    let message = if let Some(text) = err.as_string() {
        text
    } else if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        String::from(error.message())
    } else {
        format!("{err:?}")
    };
    StorageError::access(message)
}

#[cfg(feature = "csr")]
async fn run_script(
    page: &PageId,
    script: &str,
    args: js_sys::Array,
) -> Result<Option<String>, StorageError> {
    let tab = tab_for_page(page)?;
    let result = bindings::run_in_tab(tab, script, args)
        .await
        .map_err(|err| js_error(&err))?;
    Ok(result.as_string())
}

#[async_trait(?Send)]
impl StorageAccessor for ChromeAccessor {
    async fn active_page(&self) -> Result<PageId, StorageError> {
        #[cfg(feature = "csr")]
        {
            let tab = bindings::active_tab_id()
                .await
                .map_err(|err| js_error(&err))?;
            page_for_tab(tab.as_f64())
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(StorageError::access(NOT_IN_BROWSER))
        }
    }

    async fn read_raw(&self, page: &PageId) -> Result<Vec<RawEntry>, StorageError> {
        #[cfg(feature = "csr")]
        {
            let payload = run_script(page, "readAll", js_sys::Array::new()).await?;
            parse_entries(payload.as_deref())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = page;
            Err(StorageError::access(NOT_IN_BROWSER))
        }
    }

    async fn write_raw(
        &self,
        page: &PageId,
        entries: &[RawEntry],
        clear_first: bool,
    ) -> Result<Vec<KeyFailure>, StorageError> {
        let argument = entries_argument(entries)?;
        #[cfg(feature = "csr")]
        {
            let args = js_sys::Array::of2(&argument.into(), &clear_first.into());
            let payload = run_script(page, "writeMany", args).await?;
            parse_failures(payload.as_deref())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (page, argument, clear_first);
            Err(StorageError::access(NOT_IN_BROWSER))
        }
    }

    async fn remove(&self, page: &PageId, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let args = js_sys::Array::of1(&key.into());
            run_script(page, "removeOne", args).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (page, key);
            Err(StorageError::access(NOT_IN_BROWSER))
        }
    }
}

#[async_trait(?Send)]
impl Clipboard for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            bindings::write_clipboard(text)
                .await
                .map(|_| ())
                .map_err(|err| js_error(&err))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = text;
            Err(StorageError::access(NOT_IN_BROWSER))
        }
    }
}
