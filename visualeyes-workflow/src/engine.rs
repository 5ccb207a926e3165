//! WorkflowEngine — sequences one prediction run: precondition checks, AOI
//! capture, rendition, upload, and applying the results to the scene.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use visualeyes_client::{codec, FileCredentialStore, PredictionClient};
use visualeyes_core::config::VisualEyesConfig;
use visualeyes_core::constants::IMAGE_MIME;
use visualeyes_core::errors::{VisualEyesResult, WorkflowError};
use visualeyes_core::models::{AreaOfInterest, AreaScore, Notification, NodeId};
use visualeyes_core::traits::{IArtboardRenderer, INotifier, ISceneGraph};
use visualeyes_geometry::collect_areas;

use crate::messages;
use crate::overlay;
use crate::states::WorkflowState;

/// Filename of the rendered artboard in the work directory. Overwritten on
/// every run; concurrent runs are not a supported scenario.
const RENDITION_FILENAME: &str = "visualeyes-rendition.jpg";
/// Filename of the fetched heatmap in the work directory.
const HEATMAP_FILENAME: &str = "visualeyes-heatmap.jpg";

/// Outcome of one run, for embedders to inspect.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// `Done`, or `Aborted` when the run failed.
    pub state: WorkflowState,
    pub started_at: DateTime<Utc>,
    /// Areas captured and scored this run.
    pub aoi_count: usize,
    /// The heatmap layer added to the scene, when the run got that far.
    pub heatmap_layer: Option<NodeId>,
    /// The overlay groups added to the scene, one per area.
    pub overlay_groups: Vec<NodeId>,
}

/// The main orchestrator. Owns the host capabilities and the client, and
/// drives the `Idle → Validating → Rendering → Uploading → Applying → Done`
/// state machine; every failure lands in `Aborted` with a notification.
pub struct WorkflowEngine<S, R, N>
where
    S: ISceneGraph,
    R: IArtboardRenderer,
    N: INotifier,
{
    scene: S,
    renderer: R,
    notifier: N,
    credentials: FileCredentialStore,
    client: PredictionClient,
    config: VisualEyesConfig,
    state: WorkflowState,
}

impl<S, R, N> WorkflowEngine<S, R, N>
where
    S: ISceneGraph,
    R: IArtboardRenderer,
    N: INotifier,
{
    /// Build an engine over the host capabilities.
    pub fn new(
        scene: S,
        renderer: R,
        notifier: N,
        config: VisualEyesConfig,
    ) -> VisualEyesResult<Self> {
        let client = PredictionClient::new(config.client.clone())?;
        let credentials = FileCredentialStore::from_config(&config);
        Ok(Self {
            scene,
            renderer,
            notifier,
            credentials,
            client,
            config,
            state: WorkflowState::Idle,
        })
    }

    /// Current state of the engine.
    pub fn state(&self) -> WorkflowState {
        self.state
    }

    /// The scene, for inspection after a run.
    pub fn scene(&self) -> &S {
        &self.scene
    }

    /// Mutable scene access, for host edits between runs.
    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    /// Run the heatmap-only workflow: no AOI capture, no overlay groups.
    pub async fn run_heatmap(&mut self) -> RunReport {
        self.run(false).await
    }

    /// Run the full AOI workflow: capture, score, and overlay.
    pub async fn run_with_aoi(&mut self) -> RunReport {
        self.run(true).await
    }

    async fn run(&mut self, with_aoi: bool) -> RunReport {
        let started_at = Utc::now();
        self.state = WorkflowState::Idle;

        match self.execute(with_aoi).await {
            Ok((aoi_count, heatmap_layer, overlay_groups)) => {
                info!(aoi_count, "workflow run complete");
                self.notifier.notify(Notification::new(messages::DONE));
                RunReport {
                    state: self.state,
                    started_at,
                    aoi_count,
                    heatmap_layer: Some(heatmap_layer),
                    overlay_groups,
                }
            }
            Err(e) => {
                warn!(error = %e, from = ?self.state, "workflow run aborted");
                self.state = WorkflowState::Aborted;
                self.notifier
                    .notify(Notification::new(messages::for_error(&e)));
                RunReport {
                    state: self.state,
                    started_at,
                    aoi_count: 0,
                    heatmap_layer: None,
                    overlay_groups: Vec::new(),
                }
            }
        }
    }

    /// The forward path of the state machine. Any `Err` sends the engine to
    /// `Aborted`; mutations already applied stay applied.
    async fn execute(
        &mut self,
        with_aoi: bool,
    ) -> VisualEyesResult<(usize, NodeId, Vec<NodeId>)> {
        // Idle: preconditions.
        let artboard = self
            .scene
            .selected_artboard()
            .ok_or(WorkflowError::NoArtboardSelected)?;
        let api_key = self
            .credentials
            .get()?
            .ok_or(WorkflowError::MissingApiKey)?;

        // Validating.
        self.transition(WorkflowState::Validating);
        let mut areas = Vec::new();
        if with_aoi {
            let capture = collect_areas(&mut self.scene, &artboard, &self.config.aoi);
            for rejected in &capture.rejected {
                self.notifier.notify(Notification::new(messages::for_rejection(
                    rejected.classification,
                    &self.config.aoi,
                )));
            }
            areas = capture.areas;
        }

        self.notifier
            .notify(Notification::new(messages::GENERATING));

        // Rendering.
        self.transition(WorkflowState::Rendering);
        let rendition_path = self.config.work_dir().join(RENDITION_FILENAME);
        self.renderer
            .render(&artboard, &self.config.render, &rendition_path)?;
        let rendition =
            std::fs::read(&rendition_path).map_err(|e| WorkflowError::Io {
                path: rendition_path.display().to_string(),
                reason: e.to_string(),
            })?;
        let image_data_url = codec::encode_to_data_url(&rendition, IMAGE_MIME);

        // Uploading.
        self.transition(WorkflowState::Uploading);
        let prediction = self.client.submit(&image_data_url, &api_key, &areas).await?;

        // Applying.
        self.transition(WorkflowState::Applying);
        let heatmap_bytes = self.client.fetch_image(&prediction.heatmap_url).await?;
        let heatmap_path = self.config.work_dir().join(HEATMAP_FILENAME);
        std::fs::write(&heatmap_path, &heatmap_bytes).map_err(|e| WorkflowError::Io {
            path: heatmap_path.display().to_string(),
            reason: e.to_string(),
        })?;

        let heatmap_layer =
            overlay::add_heatmap_layer(&mut self.scene, &artboard, &heatmap_path);

        merge_scores(&mut areas, &prediction.areas)?;

        let mut overlay_groups = Vec::with_capacity(areas.len());
        for (index, area) in areas.iter().enumerate() {
            overlay_groups.push(overlay::add_overlay_group(
                &mut self.scene,
                &artboard,
                area,
                index,
            ));
        }

        self.transition(WorkflowState::Done);
        Ok((areas.len(), heatmap_layer, overlay_groups))
    }

    fn transition(&mut self, to: WorkflowState) {
        debug!(from = ?self.state, to = ?to, "workflow transition");
        self.state = to;
    }
}

/// Merge response scores into the captured areas. Response entries for
/// unknown ids are ignored; a captured area the response never scored is a
/// contract violation and aborts the merge.
fn merge_scores(
    areas: &mut [AreaOfInterest],
    scored: &[AreaScore],
) -> Result<(), WorkflowError> {
    for entry in scored {
        if !areas.iter().any(|a| a.id == entry.id) {
            debug!(id = %entry.id, "ignoring score for unknown area id");
        }
    }

    for area in areas.iter_mut() {
        let entry = scored
            .iter()
            .find(|s| s.id == area.id)
            .ok_or_else(|| WorkflowError::MissingScore {
                id: area.id.clone(),
            })?;
        area.score = Some(entry.score);
    }
    Ok(())
}
