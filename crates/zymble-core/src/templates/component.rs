//! Functional component templates

use crate::config::Conventions;
use crate::project::LanguageVariant;

/// Name of the props type generated for a component
pub fn props_type_name(component: &str) -> String {
    format!("{}Props", component)
}

/// Component source: imports, declaration, fixed render body, default export
pub fn component_source(
    name: &str,
    has_props: bool,
    variant: LanguageVariant,
    conventions: &Conventions,
) -> String {
    let props = props_type_name(name);
    let mut out = String::new();

    match variant {
        LanguageVariant::Typed => {
            out.push_str(&format!(
                "import type {{ FC }} from '{}';\n",
                conventions.ui_module
            ));
            if has_props {
                out.push_str(&format!("import type {{ {} }} from './types';\n", props));
            }
            out.push('\n');
            if has_props {
                out.push_str(&format!("const {}: FC<{}> = (props) => {{\n", name, props));
            } else {
                out.push_str(&format!("const {}: FC = () => {{\n", name));
            }
        }
        LanguageVariant::Untyped => {
            if has_props {
                out.push_str(&format!(
                    "/**\n * @param {{import('./types').{}}} props\n */\n",
                    props
                ));
                out.push_str(&format!("const {} = (props) => {{\n", name));
            } else {
                out.push_str(&format!("const {} = () => {{\n", name));
            }
        }
    }

    if has_props {
        out.push_str("  const {} = props;\n\n");
    }
    out.push_str(&format!("  return <div>{} Component</div>;\n", name));
    out.push_str("};\n\n");
    out.push_str(&format!("export default {};\n", name));
    out
}

/// Props type declaration with an empty body
pub fn component_props(name: &str, variant: LanguageVariant) -> String {
    let props = props_type_name(name);
    match variant {
        LanguageVariant::Typed => {
            format!("interface {props} {{}}\n\nexport type {{ {props} }};\n")
        }
        LanguageVariant::Untyped => {
            format!("/**\n * @typedef {{Object}} {props}\n */\n\nexport {{}};\n")
        }
    }
}

/// Component test rendering the component and asserting on its text
pub fn component_test(name: &str, conventions: &Conventions) -> String {
    let imports = &conventions.test_imports;
    format!(
        "{render}
{runner}
import {name} from './{name}';

describe('{name}', () => {{
  it('renders {name}', () => {{
    const {{ getByText }} = render(<{name} />);

    expect(getByText('{name} Component')).toBeInTheDocument();
  }});
}});
",
        render = imports.render,
        runner = imports.runner,
        name = name,
    )
}
