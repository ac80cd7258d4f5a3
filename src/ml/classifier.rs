// ============================================================
// Layer 5 — CNN Classifier
// ============================================================
use anyhow::Result;
use burn::prelude::*;
use serde::{Deserialize, Serialize};

use crate::data::batcher::TopicBatcher;
use crate::domain::traits::Classifier;
use crate::infra::checkpoint::CheckpointLoader;
use crate::ml::model::{TopicCnn, TopicCnnConfig};

/// Where inference runs. Passed in from configuration so the
/// scoring loop never branches on hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    /// The default wgpu adapter (discrete or integrated GPU)
    Gpu,
    /// wgpu's software adapter
    Cpu,
}

impl DeviceKind {
    pub fn wgpu_device(self) -> burn::backend::wgpu::WgpuDevice {
        use burn::backend::wgpu::WgpuDevice;
        match self {
            DeviceKind::Gpu => WgpuDevice::DefaultDevice,
            DeviceKind::Cpu => WgpuDevice::Cpu,
        }
    }
}

/// A restored TopicCnn that scores one example at a time.
///
/// B must be a plain (non-autodiff) backend: dropout is then an
/// identity and no gradient graph is recorded.
pub struct CnnClassifier<B: Backend> {
    model:   TopicCnn<B>,
    batcher: TopicBatcher<B>,
}

impl<B: Backend> CnnClassifier<B> {
    pub fn new(model: TopicCnn<B>, device: B::Device) -> Self {
        Self { model, batcher: TopicBatcher::new(device) }
    }

    /// Build the architecture from `model_cfg`, then load the
    /// checkpoint's weights into it.
    pub fn from_checkpoint(
        model_cfg: &TopicCnnConfig,
        ckpt:      &CheckpointLoader,
        device:    &B::Device,
    ) -> Result<Self> {
        let model: TopicCnn<B> = model_cfg.init(device);
        let model = ckpt.load_model(model, device)?;
        tracing::info!(
            "Model loaded from checkpoint: {} kernels, {} classes",
            model_cfg.kernel_sizes.len(),
            model_cfg.num_classes
        );
        Ok(Self::new(model, device.clone()))
    }
}

impl<B: Backend> Classifier for CnnClassifier<B> {
    fn predict(&self, token_ids: &[u32]) -> Result<Vec<f32>> {
        let batch  = self.batcher.batch(token_ids);
        let logits = self.model.forward(batch.input_ids, batch.mask); // [1, num_classes]

        logits
            .into_data()
            .convert::<f32>()
            .to_vec::<f32>()
            .map_err(|e| anyhow::anyhow!("Cannot read logits: {e:?}"))
    }
}
