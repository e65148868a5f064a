use crate::{
    config::model::EffectConfig,
    displacement::image::DisplacementImage,
    filter::{
        graph::{FilterIds, FilterTarget},
        style::StyleScope,
    },
    foundation::math::fmt_num,
};

/// Result of one bind attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BindOutcome {
    /// Every attribute was written.
    Bound,
    /// Some nodes were not attached; nothing was written.
    TargetMissing {
        /// Ids of the absent nodes.
        missing: Vec<String>,
    },
}

impl BindOutcome {
    /// `true` for [`BindOutcome::Bound`].
    pub fn is_bound(&self) -> bool {
        matches!(self, Self::Bound)
    }
}

/// Pushes a displacement map and a resolved config into a live filter graph.
#[derive(Clone, Copy, Debug, Default)]
pub struct FilterGraphBinder;

impl FilterGraphBinder {
    /// Bind `image` and `config` onto the primitives named by `ids`.
    ///
    /// Writes happen in a fixed order, the image reference first so its consumers never
    /// read a stale map:
    /// 1. `href`/`xlink:href` of the image node
    /// 2. `xChannelSelector`/`yChannelSelector` of the three displacement nodes
    /// 3. `scale` of each displacement node (`scale + r|g|b`)
    /// 4. `stdDeviation` of the output blur (`displace`)
    /// 5. size and appearance fields mirrored onto `style`
    ///
    /// All handles are checked up front. When any is missing nothing is written and the
    /// caller is expected to retry.
    #[tracing::instrument(level = "trace", skip_all, fields(filter = %ids.filter))]
    pub fn bind<T>(
        target: &mut T,
        ids: &FilterIds,
        image: &DisplacementImage,
        config: &EffectConfig,
        style: &mut StyleScope,
    ) -> BindOutcome
    where
        T: FilterTarget + ?Sized,
    {
        let missing: Vec<String> = ids
            .bindable()
            .into_iter()
            .filter(|id| !target.is_attached(id))
            .map(str::to_string)
            .collect();
        if !missing.is_empty() {
            return BindOutcome::TargetMissing { missing };
        }

        let mut ok = target.apply_attributes(
            &ids.image,
            &[
                ("href", image.uri().to_string()),
                ("xlink:href", image.uri().to_string()),
            ],
        );

        let x = config.x.as_str().to_string();
        let y = config.y.as_str().to_string();
        for node in ids.channel_nodes() {
            ok &= target.apply_attributes(
                node,
                &[("xChannelSelector", x.clone()), ("yChannelSelector", y.clone())],
            );
        }

        for (node, scale) in ids.channel_nodes().into_iter().zip(config.channel_scales()) {
            ok &= target.apply_attributes(node, &[("scale", fmt_num(scale))]);
        }

        ok &= target.apply_attributes(&ids.blur, &[("stdDeviation", fmt_num(config.displace))]);

        if !ok {
            // A node vanished between the check and the write.
            let missing = ids
                .bindable()
                .into_iter()
                .filter(|id| !target.is_attached(id))
                .map(str::to_string)
                .collect();
            return BindOutcome::TargetMissing { missing };
        }

        let size = image.size();
        style.mirror(config, size.width, size.height);
        BindOutcome::Bound
    }
}

#[cfg(test)]
#[path = "../../tests/unit/filter/binder.rs"]
mod tests;
