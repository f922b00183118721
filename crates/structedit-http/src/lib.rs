//! HTTP front end for a [`structedit`] editor.
//!
//! | route | method | response |
//! |---|---|---|
//! | `/` | GET | the rendered page |
//! | `/fields` | GET | JSON markup, editability and leaf bindings |
//! | `/mutate?operator=&path=&value=` | POST | empty on success, error text otherwise |

use std::net::SocketAddr;

use structedit::{Inspect, SharedEditor};
use tokio::net::TcpListener;
use tracing::info;

mod server;

pub use server::{router, ApiError, MutateQuery, MUTATE_PATH};

/// Bind `addr` and serve `editor` until the process stops.
pub async fn serve<T>(editor: SharedEditor<T>, addr: SocketAddr) -> std::io::Result<()>
where
    T: Inspect + Send + 'static,
{
    let app = router(editor);

    let listener = TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "structedit server listening");

    axum::serve(listener, app).await
}
