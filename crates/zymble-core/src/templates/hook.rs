//! Custom hook templates

use crate::config::Conventions;
use crate::naming::capitalize;
use crate::project::LanguageVariant;

/// Name of the return type generated for a hook
pub fn return_type_name(hook: &str) -> String {
    format!("{}ReturnType", capitalize(hook))
}

/// Hook source with optional state and effect statements
pub fn hook_source(
    name: &str,
    has_state: bool,
    has_effect: bool,
    variant: LanguageVariant,
    conventions: &Conventions,
) -> String {
    let return_type = return_type_name(name);
    let mut out = String::new();

    let primitives: Vec<&str> = [(has_state, "useState"), (has_effect, "useEffect")]
        .into_iter()
        .filter_map(|(wanted, primitive)| wanted.then_some(primitive))
        .collect();
    if !primitives.is_empty() {
        out.push_str(&format!(
            "import {{ {} }} from '{}';\n",
            primitives.join(", "),
            conventions.ui_module
        ));
    }

    match variant {
        LanguageVariant::Typed => {
            out.push_str(&format!(
                "import type {{ {} }} from './types';\n\n",
                return_type
            ));
            out.push_str(&format!("const {} = (): {} => {{\n", name, return_type));
        }
        LanguageVariant::Untyped => {
            if !primitives.is_empty() {
                out.push('\n');
            }
            out.push_str(&format!(
                "/**\n * @returns {{import('./types').{}}}\n */\n",
                return_type
            ));
            out.push_str(&format!("const {} = () => {{\n", name));
        }
    }

    if has_state {
        let initial = match variant {
            LanguageVariant::Typed => "useState<unknown>(null)",
            LanguageVariant::Untyped => "useState(null)",
        };
        out.push_str(&format!("  const [state, setState] = {};\n\n", initial));
    }
    if has_effect {
        out.push_str("  useEffect(() => {\n    // effect logic\n  }, []);\n\n");
    }
    out.push_str("  return {};\n};\n\n");
    out.push_str(&format!("export default {};\n", name));
    out
}

/// Hook test asserting the hook renders
pub fn hook_test(name: &str, conventions: &Conventions) -> String {
    let imports = &conventions.test_imports;
    format!(
        "{render_hook}
{runner}
import {name} from './{name}';

describe('{name}', () => {{
  it('should be defined', () => {{
    const {{ result }} = renderHook(() => {name}());

    expect(result.current).toBeDefined();
  }});
}});
",
        render_hook = imports.render_hook,
        runner = imports.runner,
        name = name,
    )
}

/// Hook return type declaration
pub fn hook_types(name: &str, variant: LanguageVariant) -> String {
    let return_type = return_type_name(name);
    match variant {
        LanguageVariant::Typed => {
            format!("export type {return_type} = {{\n  // define return type here\n}};\n")
        }
        LanguageVariant::Untyped => {
            format!("/**\n * @typedef {{Object}} {return_type}\n */\n\nexport {{}};\n")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(has_state: bool, has_effect: bool) -> String {
        hook_source(
            "useCustomHook",
            has_state,
            has_effect,
            LanguageVariant::Typed,
            &Conventions::default(),
        )
    }

    #[test]
    fn test_source_with_state_and_effect() {
        let expected = "import { useState, useEffect } from 'react';
import type { UseCustomHookReturnType } from './types';

const useCustomHook = (): UseCustomHookReturnType => {
  const [state, setState] = useState<unknown>(null);

  useEffect(() => {
    // effect logic
  }, []);

  return {};
};

export default useCustomHook;
";
        assert_eq!(source(true, true), expected);
    }

    #[test]
    fn test_source_with_state_only() {
        let expected = "import { useState } from 'react';
import type { UseCustomHookReturnType } from './types';

const useCustomHook = (): UseCustomHookReturnType => {
  const [state, setState] = useState<unknown>(null);

  return {};
};

export default useCustomHook;
";
        assert_eq!(source(true, false), expected);
    }

    #[test]
    fn test_source_with_effect_only() {
        let result = source(false, true);
        assert!(result.starts_with("import { useEffect } from 'react';\n"));
        assert!(result.contains("  useEffect(() => {\n    // effect logic\n  }, []);\n"));
        assert!(!result.contains("useState"));
    }

    #[test]
    fn test_source_without_state_and_effect() {
        let expected = "import type { UseCustomHookReturnType } from './types';

const useCustomHook = (): UseCustomHookReturnType => {
  return {};
};

export default useCustomHook;
";
        assert_eq!(source(false, false), expected);
    }

    #[test]
    fn test_untyped_source() {
        let result = hook_source(
            "useToggle",
            true,
            false,
            LanguageVariant::Untyped,
            &Conventions::default(),
        );
        let expected = "import { useState } from 'react';

/**
 * @returns {import('./types').UseToggleReturnType}
 */
const useToggle = () => {
  const [state, setState] = useState(null);

  return {};
};

export default useToggle;
";
        assert_eq!(result, expected);
    }

    #[test]
    fn test_test_content() {
        let expected = "import { renderHook } from '@testing-library/react-hooks';
import { describe, expect, it } from 'vitest';
import useCustomHook from './useCustomHook';

describe('useCustomHook', () => {
  it('should be defined', () => {
    const { result } = renderHook(() => useCustomHook());

    expect(result.current).toBeDefined();
  });
});
";
        assert_eq!(hook_test("useCustomHook", &Conventions::default()), expected);
    }

    #[test]
    fn test_type_definition() {
        assert_eq!(
            hook_types("useCustomHook", LanguageVariant::Typed),
            "export type UseCustomHookReturnType = {\n  // define return type here\n};\n"
        );
        assert!(hook_types("useCustomHook", LanguageVariant::Untyped)
            .contains("@typedef {Object} UseCustomHookReturnType"));
    }
}
