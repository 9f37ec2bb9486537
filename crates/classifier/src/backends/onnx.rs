use crate::{ClassifyError, Engine, InputTensor, ModelSource, Scores};
use ndarray::{ArrayD, IxDyn};
use ort::{inputs, session::Session as OrtSession, value::TensorRef};

/// Axis order the model's input expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TensorLayout {
    /// `[1, size, size, 3]`, as produced (TFLite-style models).
    #[default]
    Nhwc,
    /// `[1, 3, size, size]` (most ONNX exports).
    Nchw,
}

/// `Engine` backed by an ONNX Runtime session on the CPU execution provider.
pub struct OnnxEngine {
    session: OrtSession,
    input_name: String,
    layout: TensorLayout,
}

impl OnnxEngine {
    pub fn load(model: ModelSource, layout: TensorLayout) -> Result<Self, ClassifyError> {
        let bytes = model.read()?;
        let mut builder = OrtSession::builder().map_err(|e| {
            ClassifyError::ResourceLoad(format!("failed to create session builder: {}", e))
        })?;
        let session = builder.commit_from_memory(&bytes).map_err(|e| {
            ClassifyError::ResourceLoad(format!("failed to load model: {}", e))
        })?;

        let input_name = session
            .inputs()
            .first()
            .map(|input| input.name().to_string())
            .ok_or_else(|| ClassifyError::ResourceLoad("model has no inputs".to_string()))?;
        log::info!("onnx model loaded, feeding input '{}' as {:?}", input_name, layout);

        Ok(Self {
            session,
            input_name,
            layout,
        })
    }
}

/// Lay an HWC tensor out as a batch of one in `layout` order.
fn arrange<T: Copy>(layout: TensorLayout, shape: &[usize], data: &[T]) -> Result<ArrayD<T>, ClassifyError> {
    let &[height, width, channels] = shape else {
        return Err(ClassifyError::Inference(format!(
            "expected a [height, width, channels] input, got shape {:?}",
            shape
        )));
    };
    let hwc = ArrayD::from_shape_vec(IxDyn(&[1, height, width, channels]), data.to_vec())
        .map_err(|e| ClassifyError::Inference(format!("failed to shape input: {}", e)))?;
    Ok(match layout {
        TensorLayout::Nhwc => hwc,
        TensorLayout::Nchw => hwc.permuted_axes(IxDyn(&[0, 3, 1, 2])).as_standard_layout().into_owned(),
    })
}

impl Engine for OnnxEngine {
    fn invoke(&mut self, input: &InputTensor) -> Result<Scores, ClassifyError> {
        let outputs = match input {
            InputTensor::U8(tensor) => {
                let array = arrange(self.layout, &tensor.shape, &tensor.data)?;
                let tensor_ref = TensorRef::from_array_view(array.view()).map_err(|e| {
                    ClassifyError::Inference(format!("failed to create tensor ref: {}", e))
                })?;
                self.session
                    .run(inputs![self.input_name.as_str() => tensor_ref])
                    .map_err(|e| ClassifyError::Inference(format!("inference failed: {}", e)))?
            }
            InputTensor::F32(tensor) => {
                let array = arrange(self.layout, &tensor.shape, &tensor.data)?;
                let tensor_ref = TensorRef::from_array_view(array.view()).map_err(|e| {
                    ClassifyError::Inference(format!("failed to create tensor ref: {}", e))
                })?;
                self.session
                    .run(inputs![self.input_name.as_str() => tensor_ref])
                    .map_err(|e| ClassifyError::Inference(format!("inference failed: {}", e)))?
            }
        };

        let value = &outputs[0];
        if let Ok(array) = value.try_extract_array::<f32>() {
            return Ok(Scores::F32(array.iter().copied().collect()));
        }
        let array = value.try_extract_array::<u8>().map_err(|e| {
            ClassifyError::Inference(format!("output is neither f32 nor u8: {}", e))
        })?;
        Ok(Scores::U8(array.iter().copied().collect()))
    }
}
