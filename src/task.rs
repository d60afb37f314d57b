use std::future::Future;

#[cfg(not(target_family = "wasm"))]
pub fn block_on<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    async_std::task::block_on(future);
}

/// The browser owns the event loop, so the future is spawned instead.
#[cfg(target_family = "wasm")]
pub fn block_on<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}
