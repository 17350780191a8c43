use std::collections::{HashMap, VecDeque};

use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tokio::time::{interval, Duration};

use chump::api::{PendingFollow, Post, RabbleClient, SearchResponse};
use chump::log_debug;
use chump::logic::fetch::FetchTicket;
use chump::views::feed::FeedSource;
use chump::views::search::PendingSearch;

/// Identifies one mounted screen. A fresh id is handed out on every mount,
/// so results for a screen that was left never match the current one.
pub type ViewId = u64;

/// Priority level for API requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    High, // What the user is looking at
    Low,  // Page view reports
}

/// API request types
#[derive(Debug, Clone)]
pub enum ApiRequest {
    /// Load posts for a feed screen
    LoadFeed {
        view: ViewId,
        ticket: FetchTicket,
        source: FeedSource,
    },

    /// Run a search
    Search {
        view: ViewId,
        pending: PendingSearch,
    },

    /// Load follow requests awaiting approval
    LoadPendingFollows { view: ViewId, ticket: FetchTicket },

    /// Report a page view
    TrackView { path: String, user_id: i64 },

    /// The screen was left: drop its queued requests and abort running ones
    Cancel { view: ViewId },
}

impl ApiRequest {
    /// Extract priority from request
    fn priority(&self) -> Priority {
        match self {
            ApiRequest::TrackView { .. } => Priority::Low,
            _ => Priority::High,
        }
    }

    fn view(&self) -> Option<ViewId> {
        match self {
            ApiRequest::LoadFeed { view, .. }
            | ApiRequest::Search { view, .. }
            | ApiRequest::LoadPendingFollows { view, .. }
            | ApiRequest::Cancel { view } => Some(*view),
            ApiRequest::TrackView { .. } => None,
        }
    }
}

/// API response types
#[derive(Debug)]
pub enum ApiResponse {
    FeedResult {
        view: ViewId,
        ticket: FetchTicket,
        posts: Result<Vec<Post>, anyhow::Error>,
    },

    SearchResult {
        view: ViewId,
        pending: PendingSearch,
        results: Result<SearchResponse, anyhow::Error>,
    },

    PendingFollowsResult {
        view: ViewId,
        ticket: FetchTicket,
        followers: Result<Vec<PendingFollow>, anyhow::Error>,
    },

    ViewTracked {
        path: String,
        result: Result<(), anyhow::Error>,
    },
}

/// Internal message for tracking completed requests
pub(crate) enum InternalMessage {
    Completed { view: Option<ViewId>, task: u64 },
}

/// API service worker that runs list fetches in the background
pub struct ApiService {
    client: RabbleClient,
    request_queue: VecDeque<(ApiRequest, Priority)>,
    /// Running tasks per view, so leaving a screen can abort them
    in_flight: HashMap<Option<ViewId>, Vec<(u64, AbortHandle)>>,
    next_task: u64,
    response_tx: mpsc::UnboundedSender<ApiResponse>,
    completion_tx: mpsc::UnboundedSender<InternalMessage>,
    max_concurrent: usize,
}

impl ApiService {
    pub fn new(
        client: RabbleClient,
        response_tx: mpsc::UnboundedSender<ApiResponse>,
        completion_tx: mpsc::UnboundedSender<InternalMessage>,
    ) -> Self {
        Self {
            client,
            request_queue: VecDeque::new(),
            in_flight: HashMap::new(),
            next_task: 0,
            response_tx,
            completion_tx,
            max_concurrent: 4,
        }
    }

    fn in_flight_count(&self) -> usize {
        self.in_flight.values().map(Vec::len).sum()
    }

    /// Add a request to the queue
    fn enqueue(&mut self, request: ApiRequest) {
        if let ApiRequest::Cancel { view } = request {
            self.cancel(view);
            return;
        }

        let priority = request.priority();

        // Insert based on priority (high priority at front)
        let insert_pos = self
            .request_queue
            .iter()
            .position(|(_, p)| *p > priority)
            .unwrap_or(self.request_queue.len());

        self.request_queue.insert(insert_pos, (request, priority));
    }

    fn cancel(&mut self, view: ViewId) {
        let before = self.request_queue.len();
        self.request_queue
            .retain(|(request, _)| request.view() != Some(view));

        let mut aborted = 0;
        if let Some(tasks) = self.in_flight.remove(&Some(view)) {
            for (_, handle) in tasks {
                handle.abort();
                aborted += 1;
            }
        }

        log_debug(&format!(
            "DEBUG [API Service]: cancelled view {} ({} queued dropped, {} aborted)",
            view,
            before - self.request_queue.len(),
            aborted
        ));
    }

    fn complete(&mut self, view: Option<ViewId>, task: u64) {
        if let Some(tasks) = self.in_flight.get_mut(&view) {
            tasks.retain(|(id, _)| *id != task);
            if tasks.is_empty() {
                self.in_flight.remove(&view);
            }
        }
    }

    /// Process the next request from the queue
    fn process_next(&mut self) {
        if self.in_flight_count() >= self.max_concurrent {
            return; // At capacity, wait for some to complete
        }

        let Some((request, _)) = self.request_queue.pop_front() else {
            return; // Queue is empty
        };

        let view = request.view();
        let task = self.next_task;
        self.next_task += 1;

        // Clone what we need for the async task
        let client = self.client.clone();
        let response_tx = self.response_tx.clone();
        let completion_tx = self.completion_tx.clone();

        let handle = tokio::spawn(async move {
            if let Some(response) = Self::execute_request(&client, request).await {
                let _ = response_tx.send(response);
            }

            // Notify service that this request is complete
            let _ = completion_tx.send(InternalMessage::Completed { view, task });
        });

        self.in_flight
            .entry(view)
            .or_default()
            .push((task, handle.abort_handle()));
    }

    /// Execute an API request and return the response
    async fn execute_request(client: &RabbleClient, request: ApiRequest) -> Option<ApiResponse> {
        let response = match request {
            ApiRequest::LoadFeed {
                view,
                ticket,
                source,
            } => {
                log_debug(&format!(
                    "DEBUG [API Service]: LoadFeed view={} ticket={} source={:?}",
                    view,
                    ticket.seq(),
                    source
                ));
                let posts = source.fetch(client).await;
                ApiResponse::FeedResult {
                    view,
                    ticket,
                    posts,
                }
            }

            ApiRequest::Search { view, pending } => {
                let results = client.search(&pending.query).await;
                ApiResponse::SearchResult {
                    view,
                    pending,
                    results,
                }
            }

            ApiRequest::LoadPendingFollows { view, ticket } => {
                let followers = client
                    .get_pending_follows()
                    .await
                    .map(|pending| pending.followers.unwrap_or_default());
                ApiResponse::PendingFollowsResult {
                    view,
                    ticket,
                    followers,
                }
            }

            ApiRequest::TrackView { path, user_id } => {
                let result = client.track_view(&path, user_id).await;
                ApiResponse::ViewTracked { path, result }
            }

            ApiRequest::Cancel { .. } => return None,
        };
        Some(response)
    }
}

/// Spawn the API service worker
pub fn spawn_api_service(
    client: RabbleClient,
) -> (
    mpsc::UnboundedSender<ApiRequest>,
    mpsc::UnboundedReceiver<ApiResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ApiRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<ApiResponse>();
    let (completion_tx, mut completion_rx) = mpsc::unbounded_channel::<InternalMessage>();

    tokio::spawn(async move {
        let mut service = ApiService::new(client, response_tx, completion_tx);

        // Ticker for processing queue
        let mut tick = interval(Duration::from_millis(10));

        loop {
            tokio::select! {
                // Receive new requests
                Some(request) = request_rx.recv() => {
                    service.enqueue(request);
                }

                // Handle completion notifications
                Some(InternalMessage::Completed { view, task }) = completion_rx.recv() => {
                    service.complete(view, task);
                }

                // Process queue at regular intervals
                _ = tick.tick() => {
                    for _ in 0..service.max_concurrent {
                        if service.request_queue.is_empty() {
                            break;
                        }
                        service.process_next();
                    }
                }
            }
        }
    });

    (request_tx, response_rx)
}
