use prost_types::{Api, Method, MethodDescriptorProto};

use crate::type_url::type_url;

use super::*;

impl FileTranslator<'_> {
    pub(super) fn push_services(
        &self,
        services: &[ServiceDescriptorProto],
    ) -> Result<Vec<Api>, Error> {
        services
            .iter()
            .map(|service| {
                self.resolve_service(service)
                    .map_err(|error| error.within(Scope::Service(service.name().to_owned())))
            })
            .collect()
    }

    fn resolve_service(&self, service: &ServiceDescriptorProto) -> Result<Api, Error> {
        debug!("  service: {:?}", service.name());

        let methods = service
            .method
            .iter()
            .map(|method| {
                self.resolve_method(method)
                    .map_err(|error| error.within(Scope::Method(method.name().to_owned())))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Api {
            name: qualify(self.package, service.name()),
            methods,
            options: extract_options(service.options.as_ref())?,
            source_context: self.source_context(),
            syntax: self.syntax as i32,
            ..Default::default()
        })
    }

    fn resolve_method(&self, method: &MethodDescriptorProto) -> Result<Method, Error> {
        trace!("    method: {:?}", method.name());

        Ok(Method {
            name: method.name().to_owned(),
            request_type_url: type_url(method.input_type()),
            request_streaming: method.client_streaming(),
            response_type_url: type_url(method.output_type()),
            response_streaming: method.server_streaming(),
            options: extract_options(method.options.as_ref())?,
            syntax: self.syntax as i32,
        })
    }
}
