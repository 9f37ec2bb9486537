use base::Vec2;
use classifier::{
    Classifier, ClassifierConfig, FrameSubmitter, ModelSource, Pipeline, PipelineConfig, Submit, TensorLayout,
};
use image::{Image, PixelFormat};
use std::env;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

const MODEL_ENV: &str = "CLASSIFIER_MODEL";
const LABELS_ENV: &str = "CLASSIFIER_LABELS";
const CONFIG_ENV: &str = "CLASSIFIER_CONFIG";
const LAYOUT_ENV: &str = "CLASSIFIER_LAYOUT";

// replayed as a 30 fps camera, throttled to 20 fps
const FRAME_INTERVAL: Duration = Duration::from_millis(33);
const MIN_FRAME_INTERVAL: Duration = Duration::from_millis(50);
const FRAMES_PER_IMAGE: usize = 30;

#[derive(Debug, Default)]
struct ReplayStats {
    queued: usize,
    replaced: usize,
    throttled: usize,
}

/// Feed the stills to the pipeline the way a camera callback would.
fn replay(submitter: FrameSubmitter, stills: Vec<Image>) -> ReplayStats {
    let mut stats = ReplayStats::default();
    'outer: for still in &stills {
        for _ in 0..FRAMES_PER_IMAGE {
            match submitter.submit(still.clone()) {
                Submit::Queued => stats.queued += 1,
                Submit::Replaced => stats.replaced += 1,
                Submit::Throttled => stats.throttled += 1,
                Submit::Closed => break 'outer,
            }
            thread::sleep(FRAME_INTERVAL);
        }
    }
    submitter.close();
    stats
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    base::init_stdout_logger();

    let model_path: PathBuf = env::var(MODEL_ENV)
        .unwrap_or_else(|_| "models/mobilenet_v1_1.0_224_quant.onnx".to_string())
        .into();
    let labels_path: PathBuf = env::var(LABELS_ENV)
        .unwrap_or_else(|_| "models/labels.txt".to_string())
        .into();
    let config = match env::var(CONFIG_ENV) {
        Ok(path) => ClassifierConfig::load(path)?,
        Err(_) => ClassifierConfig::quantized(),
    };
    let layout = match env::var(LAYOUT_ENV).as_deref() {
        Ok("nchw") => TensorLayout::Nchw,
        _ => TensorLayout::Nhwc,
    };

    let paths: Vec<PathBuf> = env::args().skip(1).map(PathBuf::from).collect();
    if paths.is_empty() {
        return Err("usage: frame-classify IMAGE.jpg [IMAGE.jpg ...]".into());
    }

    println!("Frame Classify Experiment");
    println!("Model: {}", model_path.display());
    println!("Labels: {}", labels_path.display());
    println!();

    // stills stay JPEG-encoded, like an MJPG camera stream
    let mut stills = Vec::with_capacity(paths.len());
    for path in &paths {
        let data = std::fs::read(path)?;
        let size: Vec2<usize> = image::jpeg_to_rgb(&data)?.size;
        log::info!("{}: {}", path.display(), size);
        stills.push(Image::new(size, data, PixelFormat::Jpeg));
    }

    let classifier = Classifier::load(ModelSource::File(model_path), labels_path, &config, layout)?;
    let pipeline_config = PipelineConfig::default().with_min_frame_interval(MIN_FRAME_INTERVAL);
    let mut pipeline = Pipeline::spawn(classifier, pipeline_config)?;

    let producer = {
        let submitter = pipeline.submitter();
        thread::spawn(move || replay(submitter, stills))
    };

    while let Some(result) = pipeline.recv().await {
        println!("{}", result);
        println!();
    }

    let stats = producer.join().map_err(|_| "replay thread panicked")?;
    log::info!(
        "replay done: {} queued, {} replaced, {} throttled",
        stats.queued,
        stats.replaced,
        stats.throttled
    );
    Ok(())
}
