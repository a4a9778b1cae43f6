//! Fixed files written into the scaffolded project.

use thiserror::Error;

/// React entry point mounting `App` into `#root`.
pub const INDEX_JS: &str = r#"
import React from 'react';
import ReactDOM from 'react-dom/client';
import App from './App';
const root = ReactDOM.createRoot(document.getElementById('root'));
root.render(<App />);
"#;

/// Electron main process loading the bundled `build/index.html`.
pub const ELECTRON_JS: &str = r#"
const { app, BrowserWindow } = require('electron');
const path = require('path');
const url = require('url');

function createWindow() {
  const win = new BrowserWindow({
    width: 800,
    height: 600,
    webPreferences: {
      nodeIntegration: false,
      contextIsolation: true,
      preload: path.join(__dirname, 'preload.js')
    }
  });

  const startUrl = url.format({
    pathname: path.join(__dirname, '../build/index.html'),
    protocol: 'file:',
    slashes: true
  });
  win.loadURL(startUrl);
}

app.whenReady().then(createWindow);

app.on('window-all-closed', () => {
  if (process.platform !== 'darwin') {
    app.quit();
  }
});

app.on('activate', () => {
  if (BrowserWindow.getAllWindows().length === 0) {
    createWindow();
  }
});
"#;

pub const PRELOAD_JS: &str = "// Preload script";

const PRODUCT_PLACEHOLDER: &str = "{app_name}";
const PACKAGE_PLACEHOLDER: &str = "{app_name_lowercase}";

const MANIFEST_TEMPLATE: &str = r#"
{
  "name": "{app_name_lowercase}",
  "version": "1.0.0",
  "main": "public/electron.js",
  "homepage": "./",
  "scripts": {
    "start": "react-scripts start",
    "build": "react-scripts build",
    "electron": "electron .",
    "dist": "electron-builder"
  },
  "dependencies": {
    "react": "^18.2.0",
    "react-dom": "^18.2.0",
    "lucide-react": "^0.303.0"
  },
  "devDependencies": {
    "electron": "^27.1.0",
    "electron-builder": "^24.6.4",
    "react-scripts": "5.0.1"
  },
  "build": {
    "appId": "com.example.{app_name_lowercase}",
    "productName": "{app_name}",
    "directories": {
      "output": "dist"
    },
    "files": [
      "build/**/*",
      "public/electron.js"
    ],
    "win": {
      "target": "nsis"
    },
    "nsis": {
      "oneClick": false,
      "perMachine": false,
      "allowToChangeInstallationDirectory": true,
      "allowElevation": false,
      "runAfterFinish": false,
      "deleteAppDataOnUninstall": true
    },
    "mac": {
      "target": "dmg"
    }
  }
}
"#;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ManifestError {
    #[error("manifest field `{field}` is empty")]
    Empty { field: &'static str },
    #[error("manifest field `{field}` contains characters outside [A-Za-z0-9_-]: {value:?}")]
    InvalidCharacters { field: &'static str, value: String },
}

fn check_identifier(field: &'static str, value: &str) -> Result<(), ManifestError> {
    if value.is_empty() {
        return Err(ManifestError::Empty { field });
    }
    if !value
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ManifestError::InvalidCharacters {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Renders `package.json` for the scaffolded project.
///
/// Both values end up inside JSON strings unescaped, so they must already be
/// sanitized identifiers.
pub fn render_manifest(product_name: &str, package_name: &str) -> Result<String, ManifestError> {
    check_identifier("productName", product_name)?;
    check_identifier("name", package_name)?;

    Ok(MANIFEST_TEMPLATE
        .replace(PACKAGE_PLACEHOLDER, package_name)
        .replace(PRODUCT_PLACEHOLDER, product_name))
}
