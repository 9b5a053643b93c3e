// ============================================================================
// Serveur HTTP de test
// ============================================================================
// Petit serveur HTTP/1.1 sur 127.0.0.1 pour tester les appels Finnhub sans
// réseau. Chaque route renvoie un statut et un corps fixes, et le serveur
// mémorise la cible (chemin + query) de chaque requête reçue.
// ============================================================================

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Préfixe ajouté à l'URL du serveur, comme "/api/v1" chez Finnhub
const API_PREFIX: &str = "/api/v1";

/// Réponse fixe associée à un chemin
#[derive(Debug, Clone)]
pub(crate) struct MockRoute {
    path: &'static str,
    status: u16,
    body: String,
    /// Annonce un Content-Length plus grand que le corps puis ferme la connexion
    truncated: bool,
}

impl MockRoute {
    pub(crate) fn new(path: &'static str, status: u16, body: &str) -> Self {
        Self {
            path,
            status,
            body: body.to_string(),
            truncated: false,
        }
    }

    pub(crate) fn ok(path: &'static str, body: &str) -> Self {
        Self::new(path, 200, body)
    }

    pub(crate) fn truncated(path: &'static str, body: &str) -> Self {
        Self {
            truncated: true,
            ..Self::new(path, 200, body)
        }
    }
}

pub(crate) struct MockServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockServer {
    /// Démarre le serveur sur un port libre
    pub(crate) async fn start(routes: Vec<MockRoute>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let routes = Arc::new(routes);

        let recorded = requests.clone();
        tokio::spawn(async move {
            while let Ok((socket, _)) = listener.accept().await {
                let routes = routes.clone();
                let recorded = recorded.clone();
                tokio::spawn(async move {
                    serve(socket, &routes, &recorded).await;
                });
            }
        });

        Self { addr, requests }
    }

    /// URL de base à passer au client (ex: "http://127.0.0.1:41234/api/v1")
    pub(crate) fn url(&self) -> String {
        format!("http://{}{}", self.addr, API_PREFIX)
    }

    /// Cibles des requêtes reçues, dans l'ordre
    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// URL vers un port local sur lequel personne n'écoute
pub(crate) fn unused_local_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}{}", addr, API_PREFIX)
}

async fn serve(mut socket: TcpStream, routes: &[MockRoute], recorded: &Mutex<Vec<String>>) {
    // Lit l'en-tête de la requête (un GET n'a pas de corps)
    let mut head = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => n,
        };
        head.extend_from_slice(&chunk[..n]);
        if head.windows(4).any(|w| w == b"\r\n\r\n") {
            break;
        }
    }

    let head = String::from_utf8_lossy(&head);
    let target = head.split_whitespace().nth(1).unwrap_or("/").to_string();
    recorded.lock().unwrap().push(target.clone());

    let path = target.split('?').next().unwrap_or_default();
    let route = routes.iter().find(|r| path == format!("{API_PREFIX}{}", r.path));

    let (status, body, truncated) = match route {
        Some(r) => (r.status, r.body.as_str(), r.truncated),
        None => (404, "not found", false),
    };
    let content_length = if truncated { body.len() + 64 } else { body.len() };
    let reason = if status == 200 { "OK" } else { "Error" };

    let response = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {content_length}\r\nConnection: close\r\n\r\n{body}"
    );
    let _ = socket.write_all(response.as_bytes()).await;
    let _ = socket.shutdown().await;
}
