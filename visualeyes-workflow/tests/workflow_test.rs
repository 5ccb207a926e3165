use tempfile::TempDir;
use test_fixtures::{CannedResponse, CannedServer, MemoryScene, RecordingNotifier, StubRenderer};

use visualeyes_core::config::VisualEyesConfig;
use visualeyes_core::models::{Bounds, Fill};
use visualeyes_workflow::{WorkflowEngine, WorkflowState};

struct Harness {
    notifier: RecordingNotifier,
    config: VisualEyesConfig,
    // Keeps the directories alive for the duration of a test.
    _data_dir: TempDir,
    _work_dir: TempDir,
}

/// Config rooted at fresh temp directories, pointed at the given endpoint,
/// with an API key already stored unless `with_key` is false.
fn harness(endpoint_url: &str, with_key: bool) -> Harness {
    let data_dir = tempfile::tempdir().unwrap();
    let work_dir = tempfile::tempdir().unwrap();

    let mut config = VisualEyesConfig::default();
    config.client.endpoint_url = endpoint_url.to_string();
    config.client.timeout_secs = 5;
    config.storage.data_dir = Some(data_dir.path().display().to_string());
    config.storage.work_dir = Some(work_dir.path().display().to_string());

    if with_key {
        visualeyes_client::FileCredentialStore::new(data_dir.path())
            .set("key-123")
            .unwrap();
    }

    Harness {
        notifier: RecordingNotifier::new(),
        config,
        _data_dir: data_dir,
        _work_dir: work_dir,
    }
}

fn success_envelope(base_url: &str, id: &str, score: u32) -> CannedResponse {
    CannedResponse::json(
        200,
        &format!(
            r#"{{"code":"success","url":"{base_url}/heatmap.jpg","aoi":[{{"id":"{id}","score":{score}}}]}}"#
        ),
    )
}

const HEATMAP_BYTES: &[u8] = b"\xFF\xD8\xFFcanned-heatmap";

#[tokio::test]
async fn aoi_workflow_applies_heatmap_and_scores() {
    let server = CannedServer::start_with(|url| {
        vec![
            success_envelope(url, "aoi-1", 77),
            CannedResponse::bytes(200, "image/jpeg", HEATMAP_BYTES),
        ]
    });

    let h = harness(&server.url(), true);
    let mut scene = MemoryScene::with_artboard(1920.0, 1080.0);
    scene.add_rectangle_with_id(
        "aoi-1",
        "AOI",
        Bounds::new(100.0, 100.0, 200.0, 80.0),
        Fill::SolidColor {
            hex: "#FF8800".into(),
        },
    );

    let mut engine =
        WorkflowEngine::new(scene, StubRenderer::new(), h.notifier.clone(), h.config).unwrap();
    let report = engine.run_with_aoi().await;

    assert_eq!(report.state, WorkflowState::Done);
    assert_eq!(report.aoi_count, 1);
    assert_eq!(report.overlay_groups.len(), 1);

    let scene = engine.scene();
    // One locked, artboard-sized heatmap layer.
    let heatmaps = scene.nodes_named("VisualEyes Heatmap");
    assert_eq!(heatmaps.len(), 1);
    assert!(heatmaps[0].locked);
    assert_eq!(heatmaps[0].bounds.width, 1920.0);
    assert_eq!(heatmaps[0].bounds.height, 1080.0);

    // The fetched heatmap bytes were persisted for the image fill.
    let image_path = heatmaps[0].image_path.as_ref().unwrap();
    assert_eq!(std::fs::read(image_path).unwrap(), HEATMAP_BYTES);

    // One locked overlay group with the merged score on its text node.
    let groups = scene.groups_with_prefix("AOI ");
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].name, "AOI 1");
    assert!(groups[0].locked);
    assert_eq!(scene.texts(), vec!["77%".to_string()]);

    assert!(h.notifier.saw("Your heatmap is generating"));
    assert!(h.notifier.saw("Done!"));
}

#[tokio::test]
async fn heatmap_only_workflow_adds_no_overlays() {
    let server = CannedServer::start_with(|url| {
        vec![
            CannedResponse::json(
                200,
                &format!(r#"{{"code":"success","url":"{url}/heatmap.jpg"}}"#),
            ),
            CannedResponse::bytes(200, "image/jpeg", HEATMAP_BYTES),
        ]
    });

    let h = harness(&server.url(), true);
    let scene = MemoryScene::with_artboard(800.0, 600.0);

    let mut engine =
        WorkflowEngine::new(scene, StubRenderer::new(), h.notifier.clone(), h.config).unwrap();
    let report = engine.run_heatmap().await;

    assert_eq!(report.state, WorkflowState::Done);
    assert_eq!(report.aoi_count, 0);
    assert!(report.overlay_groups.is_empty());
    assert_eq!(engine.scene().nodes_named("VisualEyes Heatmap").len(), 1);
    assert!(engine.scene().groups_with_prefix("AOI ").is_empty());
}

#[tokio::test]
async fn missing_artboard_aborts_before_any_work() {
    let h = harness("http://127.0.0.1:9", true);
    let scene = MemoryScene::empty();

    let mut engine =
        WorkflowEngine::new(scene, StubRenderer::new(), h.notifier.clone(), h.config).unwrap();
    let report = engine.run_with_aoi().await;

    assert_eq!(report.state, WorkflowState::Aborted);
    assert!(h.notifier.saw("Please select an artboard"));
    assert!(engine.scene().added.is_empty());
}

#[tokio::test]
async fn missing_api_key_aborts_before_any_work() {
    let h = harness("http://127.0.0.1:9", false);
    let scene = MemoryScene::with_artboard(800.0, 600.0);

    let mut engine =
        WorkflowEngine::new(scene, StubRenderer::new(), h.notifier.clone(), h.config).unwrap();
    let report = engine.run_with_aoi().await;

    assert_eq!(report.state, WorkflowState::Aborted);
    assert!(h.notifier.saw("Please set your API key"));
}

#[tokio::test]
async fn invalid_key_aborts_without_scene_additions() {
    let server = CannedServer::start(vec![CannedResponse::json(401, r#"{"detail":"bad"}"#)]);

    let h = harness(&server.url(), true);
    let mut scene = MemoryScene::with_artboard(1920.0, 1080.0);
    scene.add_rectangle_with_id(
        "aoi-1",
        "AOI",
        Bounds::new(100.0, 100.0, 200.0, 80.0),
        Fill::None,
    );

    let mut engine =
        WorkflowEngine::new(scene, StubRenderer::new(), h.notifier.clone(), h.config).unwrap();
    let report = engine.run_with_aoi().await;

    assert_eq!(report.state, WorkflowState::Aborted);
    assert!(report.heatmap_layer.is_none());
    assert!(h.notifier.saw("Your API key is not valid"));
    // Nothing was added to the scene; the captured layer stays removed.
    assert!(engine.scene().added.is_empty());
    assert!(engine.scene().grouped.is_empty());
}

#[tokio::test]
async fn quota_exceeded_surfaces_its_own_message() {
    let server = CannedServer::start(vec![CannedResponse::json(403, "{}")]);

    let h = harness(&server.url(), true);
    let scene = MemoryScene::with_artboard(800.0, 600.0);

    let mut engine =
        WorkflowEngine::new(scene, StubRenderer::new(), h.notifier.clone(), h.config).unwrap();
    let report = engine.run_heatmap().await;

    assert_eq!(report.state, WorkflowState::Aborted);
    assert!(h.notifier.saw("heatmaps limit has been exceeded"));
}

#[tokio::test]
async fn rejected_layer_notifies_but_run_continues() {
    let server = CannedServer::start_with(|url| {
        vec![
            success_envelope(url, "aoi-good", 42),
            CannedResponse::bytes(200, "image/jpeg", HEATMAP_BYTES),
        ]
    });

    let h = harness(&server.url(), true);
    let mut scene = MemoryScene::with_artboard(1920.0, 1080.0);
    scene.add_rectangle_with_id("aoi-tiny", "AOI", Bounds::new(0.0, 0.0, 10.0, 10.0), Fill::None);
    scene.add_rectangle_with_id(
        "aoi-good",
        "AOI",
        Bounds::new(50.0, 50.0, 300.0, 100.0),
        Fill::None,
    );

    let mut engine =
        WorkflowEngine::new(scene, StubRenderer::new(), h.notifier.clone(), h.config).unwrap();
    let report = engine.run_with_aoi().await;

    assert_eq!(report.state, WorkflowState::Done);
    assert_eq!(report.aoi_count, 1);
    assert!(h.notifier.saw("not big enough"));
}

#[tokio::test]
async fn response_missing_a_captured_area_aborts_with_generic_message() {
    let server = CannedServer::start_with(|url| {
        vec![
            // The envelope scores a different id than the captured one.
            success_envelope(url, "someone-else", 50),
            CannedResponse::bytes(200, "image/jpeg", HEATMAP_BYTES),
        ]
    });

    let h = harness(&server.url(), true);
    let mut scene = MemoryScene::with_artboard(1920.0, 1080.0);
    scene.add_rectangle_with_id(
        "aoi-1",
        "AOI",
        Bounds::new(100.0, 100.0, 200.0, 80.0),
        Fill::None,
    );

    let mut engine =
        WorkflowEngine::new(scene, StubRenderer::new(), h.notifier.clone(), h.config).unwrap();
    let report = engine.run_with_aoi().await;

    assert_eq!(report.state, WorkflowState::Aborted);
    assert!(h.notifier.saw("Something went wrong"));
}

#[tokio::test]
async fn render_failure_aborts_with_generic_message() {
    let h = harness("http://127.0.0.1:9", true);
    let scene = MemoryScene::with_artboard(800.0, 600.0);

    let mut engine = WorkflowEngine::new(
        scene,
        StubRenderer::failing("rendition backend unavailable"),
        h.notifier.clone(),
        h.config,
    )
    .unwrap();
    let report = engine.run_heatmap().await;

    assert_eq!(report.state, WorkflowState::Aborted);
    assert!(h.notifier.saw("Something went wrong"));
}

#[tokio::test]
async fn running_twice_stacks_independent_results() {
    let server = CannedServer::start_with(|url| {
        vec![
            success_envelope(url, "aoi-first", 60),
            CannedResponse::bytes(200, "image/jpeg", HEATMAP_BYTES),
            success_envelope(url, "aoi-second", 30),
            CannedResponse::bytes(200, "image/jpeg", HEATMAP_BYTES),
        ]
    });

    let h = harness(&server.url(), true);
    let mut scene = MemoryScene::with_artboard(1920.0, 1080.0);
    scene.add_rectangle_with_id(
        "aoi-first",
        "AOI",
        Bounds::new(100.0, 100.0, 200.0, 80.0),
        Fill::None,
    );

    let mut engine =
        WorkflowEngine::new(scene, StubRenderer::new(), h.notifier.clone(), h.config).unwrap();

    let first = engine.run_with_aoi().await;
    assert_eq!(first.state, WorkflowState::Done);

    // The first AOI layer was consumed; the designer marks a new one.
    engine.scene_mut().add_rectangle_with_id(
        "aoi-second",
        "AOI",
        Bounds::new(400.0, 200.0, 150.0, 90.0),
        Fill::None,
    );

    let second = engine.run_with_aoi().await;
    assert_eq!(second.state, WorkflowState::Done);

    // No deduplication: two heatmap layers and two overlay groups.
    let scene = engine.scene();
    assert_eq!(scene.nodes_named("VisualEyes Heatmap").len(), 2);
    let groups = scene.groups_with_prefix("AOI ");
    assert_eq!(groups.len(), 2);
    assert_eq!(scene.texts(), vec!["60%".to_string(), "30%".to_string()]);
}
