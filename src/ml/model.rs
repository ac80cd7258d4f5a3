use burn::{
    nn::{
        conv::{Conv1d, Conv1dConfig},
        Dropout, DropoutConfig,
        Embedding, EmbeddingConfig,
        Linear, LinearConfig,
        PaddingConfig1d,
    },
    prelude::*,
    tensor::activation::relu,
};

// NOTE: #[derive(Config)] already generates Clone and Serialize/Deserialize
// internally — do NOT add them again or you get conflicting impls.
#[derive(Config, Debug)]
pub struct TopicCnnConfig {
    pub vocab_size:    usize,
    pub emb_size:      usize,
    pub dropout:       f64,
    pub kernel_sizes:  Vec<usize>,
    pub num_feat_maps: usize,
    pub num_classes:   usize,
}

impl TopicCnnConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> TopicCnn<B> {
        let embedding = EmbeddingConfig::new(self.vocab_size, self.emb_size).init(device);
        let convs: Vec<Conv1d<B>> = self
            .kernel_sizes
            .iter()
            .map(|&k| self.build_conv(k, device))
            .collect();
        let dropout    = DropoutConfig::new(self.dropout).init();
        let classifier = LinearConfig::new(self.num_feat_maps * self.kernel_sizes.len(), self.num_classes)
            .init(device);
        TopicCnn { embedding, convs, dropout, classifier }
    }

    fn build_conv<B: Backend>(&self, kernel_size: usize, device: &B::Device) -> Conv1d<B> {
        // Half-kernel padding keeps the output non-empty for the
        // shortest possible input ([CLS] [SEP])
        Conv1dConfig::new(self.emb_size, self.num_feat_maps, kernel_size)
            .with_padding(PaddingConfig1d::Explicit(kernel_size / 2))
            .init(device)
    }
}

/// Kim-style CNN for sentence classification:
/// embedding → parallel Conv1d + ReLU + max-over-time → concat → dropout → linear.
#[derive(Module, Debug)]
pub struct TopicCnn<B: Backend> {
    pub embedding:  Embedding<B>,
    pub convs:      Vec<Conv1d<B>>,
    pub dropout:    Dropout,
    pub classifier: Linear<B>,
}

impl<B: Backend> TopicCnn<B> {
    /// input_ids: [batch, seq_len], mask: [batch, seq_len] → logits: [batch, num_classes]
    pub fn forward(&self, input_ids: Tensor<B, 2, Int>, mask: Tensor<B, 2>) -> Tensor<B, 2> {
        // Zero the embeddings of padded positions
        let emb = self.embedding.forward(input_ids) * mask.unsqueeze_dim::<3>(2);

        // Conv1d wants channels first: [batch, emb_size, seq_len]
        let x = emb.swap_dims(1, 2);

        let pooled: Vec<Tensor<B, 2>> = self
            .convs
            .iter()
            .map(|conv| {
                let h = relu(conv.forward(x.clone())); // [batch, feat_maps, len']
                let [batch, feat_maps, _] = h.dims();
                h.max_dim(2).reshape([batch, feat_maps])
            })
            .collect();

        let features = Tensor::cat(pooled, 1); // [batch, feat_maps * n_kernels]
        self.classifier.forward(self.dropout.forward(features))
    }
}
